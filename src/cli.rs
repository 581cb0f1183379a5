//! Command-line interface definition using clap.
//!
//! One positional argument, the archive root. Anything else is a usage error
//! and exits before touching the disk.

use std::path::PathBuf;

use clap::Parser;

/// Flatten a Slack workspace export into per-channel JSON and transcripts.
///
/// Output goes to ./output/debug/<channel>.json and
/// ./output/formatted/<channel>.txt.
#[derive(Parser, Debug, Clone)]
#[command(name = "slackpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slackpack ./my-workspace-export
    RUST_LOG=debug slackpack ./export")]
pub struct Args {
    /// Path to the unpacked export (contains users.json and channel directories)
    pub archive: PathBuf,
}
