//! Core processing logic for slackpack.
//!
//! This module contains:
//! - [`archive`] - Reading the roster and per-channel batch files
//! - [`normalize`] - Filtering records and building [`Message`]s
//! - [`markup`] - Mention, subteam and channel tag rewriting
//! - [`output`] - Structured JSON and transcript writers
//! - [`processor`] - The whole-archive pipeline and its statistics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slackpack::config::ConvertConfig;
//! use slackpack::core::convert_archive;
//! use std::path::Path;
//!
//! let stats = convert_archive(Path::new("slack-export"), &ConvertConfig::default())?;
//! println!("{} messages", stats.total_messages());
//! # Ok::<(), slackpack::SlackpackError>(())
//! ```

pub mod archive;
pub mod markup;
pub mod normalize;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use archive::{list_channels, load_channel_batches, load_users, load_users_file};
pub use normalize::{Exclusion, Normalizer, exclusion, parse_epoch_seconds};
pub use output::{to_structured, to_transcript, write_structured, write_transcript};
pub use processor::{
    ChannelStats, ConversionStats, convert_archive, load_archive, process_channel, write_channels,
};

// Re-export Message from the crate root
pub use crate::Message;
