//! Unified error types for slackpack.
//!
//! Every failure in the conversion pipeline is fatal: the first error aborts
//! the whole run. [`SlackpackError`] keeps enough context (the offending path,
//! the raw timestamp value) for the top level to print an actionable message.
//!
//! Unknown user identifiers and excluded records are *not* errors and never
//! surface here.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for slackpack operations.
///
/// # Example
///
/// ```rust
/// use slackpack::error::Result;
/// use slackpack::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SlackpackError>;

/// The error type for all slackpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlackpackError {
    /// An I/O error occurred while reading the archive or writing output.
    ///
    /// This typically happens when:
    /// - `users.json` is missing from the archive root
    /// - A channel directory or batch file is unreadable
    /// - The output directory cannot be created or written
    #[error("could not {context} {}: {source}", path.display())]
    Io {
        /// What was being attempted (e.g. "read roster file")
        context: &'static str,
        /// The path involved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Structured input was not valid JSON of the expected shape.
    #[error("could not parse {what} {}: {source}", path.display())]
    Parse {
        /// What was being parsed ("roster" or "message batch")
        what: &'static str,
        /// The file that failed to parse
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A message record carried a timestamp that is not a decimal epoch value.
    ///
    /// A corrupt timestamp is treated as archive corruption, so this aborts
    /// the run instead of skipping the record.
    #[error("invalid timestamp '{value}'{}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    InvalidTimestamp {
        /// The raw `ts` value
        value: String,
        /// The batch file the record came from, if known
        path: Option<PathBuf>,
    },

    /// Directory traversal failed.
    #[error("could not list directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// JSON serialization error while producing structured output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured fixed zone offset is not a valid UTC offset.
    ///
    /// Offsets must lie strictly within one day either way of UTC.
    #[error("invalid zone offset {offset}s: must be within ±86399s of UTC")]
    InvalidZone {
        /// The configured offset in seconds east of UTC
        offset: i32,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SlackpackError {
    /// Creates an I/O error bound to a path.
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SlackpackError::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error for the roster file.
    pub fn roster_parse(source: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        SlackpackError::Parse {
            what: "roster",
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error for a daily message batch.
    pub fn batch_parse(source: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        SlackpackError::Parse {
            what: "message batch",
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        SlackpackError::InvalidTimestamp {
            value: value.into(),
            path: None,
        }
    }

    /// Creates an invalid zone offset error.
    pub fn invalid_zone(offset: i32) -> Self {
        SlackpackError::InvalidZone { offset }
    }

    /// Attaches the batch file path to an [`InvalidTimestamp`](Self::InvalidTimestamp)
    /// error. Other variants pass through unchanged.
    #[must_use]
    pub fn in_file(self, file: &Path) -> Self {
        match self {
            SlackpackError::InvalidTimestamp { value, path: None } => {
                SlackpackError::InvalidTimestamp {
                    value,
                    path: Some(file.to_path_buf()),
                }
            }
            other => other,
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, SlackpackError::Io { .. } | SlackpackError::Walk(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, SlackpackError::Parse { .. })
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, SlackpackError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, SlackpackError::InvalidZone { .. })
    }
}
