//! Conversion settings.
//!
//! The CLI always runs with [`ConvertConfig::default`]; library users (and
//! tests) can redirect output and pin the time zone so results do not depend
//! on the machine running the conversion.
//!
//! # Example
//!
//! ```rust
//! use slackpack::config::{ConvertConfig, Zone};
//!
//! let config = ConvertConfig::new()
//!     .with_output_dir("target/slack-out")
//!     .with_zone(Zone::utc());
//! assert_eq!(config.zone, Zone::Fixed(0));
//! ```

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlackpackError};

/// Default upper bound on mention tokens rewritten per message.
pub const DEFAULT_MAX_MENTIONS: usize = 999;

/// Time zone used to turn epoch seconds into calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// The process's local time zone (default).
    #[default]
    Local,
    /// A fixed offset east of UTC, in seconds.
    Fixed(i32),
}

impl Zone {
    /// UTC as a fixed zone.
    pub fn utc() -> Self {
        Zone::Fixed(0)
    }

    /// A fixed zone `secs` east of UTC, or `None` if that is not a valid UTC
    /// offset (a full day or more either way).
    pub fn fixed(secs: i32) -> Option<Self> {
        FixedOffset::east_opt(secs).map(|_| Zone::Fixed(secs))
    }

    /// Checks that a fixed offset is a valid UTC offset.
    pub fn validate(self) -> Result<Self> {
        match self {
            Zone::Fixed(east) if FixedOffset::east_opt(east).is_none() => {
                Err(SlackpackError::invalid_zone(east))
            }
            zone => Ok(zone),
        }
    }

    /// Converts whole epoch seconds into calendar time in this zone.
    ///
    /// Returns `None` when the instant is outside chrono's range or the fixed
    /// offset is invalid (see [`Zone::validate`]).
    pub fn from_epoch(self, secs: i64) -> Option<DateTime<FixedOffset>> {
        let utc = DateTime::<Utc>::from_timestamp(secs, 0)?;
        match self {
            Zone::Local => Some(utc.with_timezone(&Local).fixed_offset()),
            Zone::Fixed(east) => Some(utc.with_timezone(&FixedOffset::east_opt(east)?)),
        }
    }
}

/// Configuration for a whole-archive conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Root output directory (default: `output`).
    ///
    /// Structured documents go to `<output_dir>/debug/<channel>.json`,
    /// transcripts to `<output_dir>/formatted/<channel>.txt`.
    pub output_dir: PathBuf,

    /// Zone for calendar conversion and transcript fields (default: local).
    pub zone: Zone,

    /// Maximum mention tokens rewritten per message (default: 999).
    pub max_mentions: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            zone: Zone::Local,
            max_mentions: DEFAULT_MAX_MENTIONS,
        }
    }
}

impl ConvertConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the time zone.
    #[must_use]
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Sets the mention rewrite bound.
    #[must_use]
    pub fn with_max_mentions(mut self, max: usize) -> Self {
        self.max_mentions = max;
        self
    }

    /// Rejects settings no conversion can run with.
    pub fn validate(&self) -> Result<()> {
        self.zone.validate()?;
        Ok(())
    }

    /// Directory receiving the structured per-channel documents.
    pub fn debug_dir(&self) -> PathBuf {
        self.output_dir.join("debug")
    }

    /// Directory receiving the per-channel transcripts.
    pub fn formatted_dir(&self) -> PathBuf {
        self.output_dir.join("formatted")
    }
}
