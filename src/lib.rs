//! # Slackpack
//!
//! Flattens a Slack workspace export into readable per-channel transcripts.
//!
//! ## Overview
//!
//! A Slack export is a directory with a `users.json` roster and one
//! subdirectory per channel holding daily JSON batch files. Slackpack:
//!
//! - keeps only real messages (no join events, no thread replies)
//! - resolves author ids and `<@U123>` mentions to display names
//! - unwraps `<!subteam^...|@team>` and `<#C123|channel>` tags
//! - converts `ts` epoch strings to calendar time
//!
//! and writes, for every channel, a structured JSON document and a plain-text
//! transcript.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slackpack::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let config = ConvertConfig::new().with_zone(Zone::utc());
//!     let stats = convert_archive(Path::new("slack-export"), &config)?;
//!     println!("{} channels", stats.channels.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] - The pipeline
//!   - [`core::archive`] - Roster and batch loading
//!   - [`core::normalize`] - [`Normalizer`](core::Normalizer), exclusion filter
//!   - [`core::markup`] - Inline markup rewriting
//!   - [`core::output`] - JSON and transcript writers
//!   - [`core::processor`] - [`convert_archive`](core::convert_archive)
//! - [`parsing`] - Raw export record types
//! - [`config`] - [`ConvertConfig`](config::ConvertConfig), [`Zone`](config::Zone)
//! - [`message`] - [`Message`], [`User`](message::User), [`UserTable`](message::UserTable)
//! - [`error`] - [`SlackpackError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SlackpackError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use slackpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{Result, SlackpackError};

    pub use crate::config::{ConvertConfig, Zone};

    pub use crate::message::{Channel, User, UserTable};

    pub use crate::core::{
        ConversionStats, Normalizer, convert_archive, load_archive, write_channels,
    };

    pub use crate::core::markup::rewrite;

    pub use crate::core::output::{to_structured, to_transcript};
}
