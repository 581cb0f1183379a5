//! Per-channel output writers.
//!
//! Each channel produces two files under the configured output root:
//! - `debug/<channel>.json` via [`write_structured`] / [`to_structured`]:
//!   tab-indented JSON array of `{user, text, time}`
//! - `formatted/<channel>.txt` via [`write_transcript`] / [`to_transcript`]:
//!   `MM/D HH:MM user: text` lines, each followed by a blank line
//!
//! # Example
//!
//! ```rust
//! use slackpack::Message;
//! use slackpack::config::Zone;
//! use slackpack::core::output::to_transcript;
//!
//! let time = Zone::utc().from_epoch(1609459200).unwrap();
//! let messages = vec![Message::new("Alice", "happy new year", time)];
//! assert_eq!(to_transcript(&messages), "01/1 00:00 Alice: happy new year\n\n");
//! ```

use std::fs;
use std::path::Path;

use crate::config::ConvertConfig;
use crate::error::{Result, SlackpackError};

mod json_writer;
mod transcript_writer;

pub use json_writer::{to_structured, write_structured};
pub use transcript_writer::{format_line, to_transcript, write_transcript};

/// Creates `<output>/debug` and `<output>/formatted` (and `<output>` itself).
///
/// Existing directories are fine.
pub fn ensure_output_dirs(config: &ConvertConfig) -> Result<()> {
    for dir in [config.debug_dir(), config.formatted_dir()] {
        create_dir(&dir)?;
    }
    Ok(())
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| SlackpackError::io("create output directory", dir, e))
}
