//! Resolved users and normalized messages.
//!
//! A [`Message`] is the output unit of the pipeline: author identifier already
//! resolved to a display name, markup already rewritten, and the epoch
//! timestamp turned into calendar time in the configured zone.
//!
//! # Example
//!
//! ```
//! use slackpack::Message;
//! use slackpack::config::Zone;
//!
//! let time = Zone::utc().from_epoch(1609459200).unwrap();
//! let msg = Message::new("Alice", "hello", time);
//! assert_eq!(msg.user(), "Alice");
//! assert_eq!(msg.text(), "hello");
//! ```

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A roster entry with its display name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque workspace identifier (e.g. `U012AB3CD`).
    pub id: String,
    /// Display name, or real name when the display name is empty.
    pub name: String,
}

impl User {
    /// Creates a user.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Lookup table from user identifier to resolved user.
///
/// Misses are not errors: [`UserTable::name_of`] returns `""` for unknown ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTable {
    users: HashMap<String, User>,
}

impl UserTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a user, replacing any earlier entry with the same id.
    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Returns the user with this id, if present.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Returns the resolved name for `id`, or `""` when unknown.
    pub fn name_of(&self, id: &str) -> &str {
        self.users.get(id).map(|u| u.name.as_str()).unwrap_or("")
    }

    /// Number of distinct users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the table holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<User> for UserTable {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut table = Self::new();
        for user in iter {
            table.insert(user);
        }
        table
    }
}

/// A normalized, conversational message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Resolved author name (may be empty for unknown authors).
    pub user: String,

    /// Message body with mentions, subteam tags and channel tags rewritten.
    pub text: String,

    /// When the message was posted, in the configured zone.
    pub time: DateTime<FixedOffset>,
}

impl Message {
    /// Creates a message.
    pub fn new(user: impl Into<String>, text: impl Into<String>, time: DateTime<FixedOffset>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
            time,
        }
    }

    /// Returns the author name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the rewritten text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the calendar time.
    pub fn time(&self) -> DateTime<FixedOffset> {
        self.time
    }
}

/// A channel's name and its messages in encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Directory name of the channel.
    pub name: String,
    /// Normalized messages, in file-then-record order.
    pub messages: Vec<Message>,
    /// Records dropped by the exclusion filter.
    pub skipped: usize,
}
