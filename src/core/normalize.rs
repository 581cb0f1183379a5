//! Turning raw export records into [`Message`]s.
//!
//! For each record the [`Normalizer`]:
//!
//! 1. drops non-conversational records (see [`exclusion`])
//! 2. parses the `ts` epoch string, failing the run if it is malformed
//! 3. resolves the author id to a display name (`""` when unknown)
//! 4. rewrites inline markup (see [`markup`](super::markup))
//!
//! # Example
//!
//! ```rust
//! use slackpack::config::{ConvertConfig, Zone};
//! use slackpack::core::normalize::Normalizer;
//! use slackpack::message::{User, UserTable};
//! use slackpack::parsing::RawMessage;
//!
//! let users: UserTable = [User::new("U1", "Alice")].into_iter().collect();
//! let config = ConvertConfig::new().with_zone(Zone::utc());
//! let normalizer = Normalizer::new(&users, &config);
//!
//! let raw: RawMessage = serde_json::from_str(
//!     r#"{"type": "message", "user": "U1", "ts": "1609459200.000100", "text": "hi <@U1>"}"#,
//! )?;
//! let msg = normalizer.normalize(&raw)?.expect("conversational record");
//! assert_eq!(msg.user, "Alice");
//! assert_eq!(msg.text, "hi @Alice");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use tracing::{debug, trace};

use super::markup;
use crate::Message;
use crate::config::{ConvertConfig, DEFAULT_MAX_MENTIONS, Zone};
use crate::error::{Result, SlackpackError};
use crate::message::UserTable;
use crate::parsing::RawMessage;

/// Why a record was left out of the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// `type` is not `"message"`.
    NotMessage,
    /// `subtype` is `"channel_join"`.
    ChannelJoin,
    /// `parent_user_id` is set: a reply inside a thread.
    ThreadReply,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::NotMessage => write!(f, "not a message"),
            Exclusion::ChannelJoin => write!(f, "channel join"),
            Exclusion::ThreadReply => write!(f, "thread reply"),
        }
    }
}

/// Returns the reason `raw` is excluded, or `None` if it is a real message.
///
/// Each condition alone is enough; they are checked independently.
pub fn exclusion(raw: &RawMessage) -> Option<Exclusion> {
    if raw.kind() != "message" {
        Some(Exclusion::NotMessage)
    } else if raw.subtype() == "channel_join" {
        Some(Exclusion::ChannelJoin)
    } else if !raw.parent_user_id().is_empty() {
        Some(Exclusion::ThreadReply)
    } else {
        None
    }
}

/// Parses a decimal epoch string into whole seconds, truncating toward zero.
///
/// # Example
///
/// ```rust
/// use slackpack::core::normalize::parse_epoch_seconds;
///
/// assert_eq!(parse_epoch_seconds("1609459200.000100")?, 1609459200);
/// assert!(parse_epoch_seconds("not-a-time").is_err());
/// # Ok::<(), slackpack::SlackpackError>(())
/// ```
pub fn parse_epoch_seconds(ts: &str) -> Result<i64> {
    let value: f64 = ts
        .parse()
        .map_err(|_| SlackpackError::invalid_timestamp(ts))?;
    if !value.is_finite() {
        return Err(SlackpackError::invalid_timestamp(ts));
    }
    Ok(value.trunc() as i64)
}

/// Normalizes raw records against a user table.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    users: &'a UserTable,
    zone: Zone,
    max_mentions: usize,
}

impl<'a> Normalizer<'a> {
    /// Creates a normalizer using the zone and mention bound from `config`.
    pub fn new(users: &'a UserTable, config: &ConvertConfig) -> Self {
        Self {
            users,
            zone: config.zone,
            max_mentions: config.max_mentions,
        }
    }

    /// Creates a normalizer for `zone` with the default mention bound.
    pub fn with_zone(users: &'a UserTable, zone: Zone) -> Self {
        Self {
            users,
            zone,
            max_mentions: DEFAULT_MAX_MENTIONS,
        }
    }

    /// Normalizes one record.
    ///
    /// Returns `Ok(None)` for excluded records. A malformed or out-of-range
    /// timestamp is an error, not a skip. An invalid fixed zone offset fails
    /// with [`SlackpackError::InvalidZone`] instead.
    pub fn normalize(&self, raw: &RawMessage) -> Result<Option<Message>> {
        if let Some(reason) = exclusion(raw) {
            debug!(%reason, ts = raw.ts(), "skipping record");
            return Ok(None);
        }

        let secs = parse_epoch_seconds(raw.ts())?;
        let time = self.zone.from_epoch(secs).ok_or_else(|| match self.zone.validate() {
            Err(e) => e,
            Ok(_) => SlackpackError::invalid_timestamp(raw.ts()),
        })?;

        if self.users.get(raw.user()).is_none() {
            trace!(user = raw.user(), "unknown author");
        }
        let user = self.users.name_of(raw.user());
        let text = markup::rewrite(raw.text(), self.users, self.max_mentions);

        Ok(Some(Message::new(user, text, time)))
    }
}
