//! Raw export record types.
//!
//! These mirror the on-disk JSON of a Slack workspace export closely enough to
//! deserialize it, and nothing more. Unknown fields are ignored; missing or
//! `null` string fields read as empty.

pub mod slack;

pub use slack::{RawMessage, RawProfile, RawUser};
