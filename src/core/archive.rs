//! Reading a Slack export archive from disk.
//!
//! An archive root looks like:
//!
//! ```text
//! export/
//! ├── users.json          roster
//! ├── general/            one directory per channel
//! │   ├── 2021-01-01.json one file per day, a JSON array of records
//! │   └── 2021-01-02.json
//! └── random/
//!     └── 2021-01-01.json
//! ```
//!
//! Directory entries are visited sorted by file name, so daily files named
//! `YYYY-MM-DD.json` come back in date order. No other sorting happens.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, SlackpackError};
use crate::message::{User, UserTable};
use crate::parsing::{RawMessage, RawUser};

/// Name of the roster file inside the archive root.
pub const ROSTER_FILE: &str = "users.json";

fn parse_roster(bytes: &[u8]) -> serde_json::Result<UserTable> {
    let entries: Vec<RawUser> = serde_json::from_slice(bytes)?;
    Ok(entries
        .iter()
        .map(|entry| User::new(entry.id(), entry.resolved_name()))
        .collect())
}

/// Builds the user table from roster JSON.
///
/// The resolved name is the display name, or the real name when the display
/// name is empty. Duplicate ids keep the later entry.
///
/// # Example
///
/// ```rust
/// use slackpack::core::archive::load_users;
///
/// let users = load_users(br#"[
///     {"id": "U1", "profile": {"display_name": "", "real_name": "Alice Smith"}}
/// ]"#)?;
/// assert_eq!(users.name_of("U1"), "Alice Smith");
/// # Ok::<(), slackpack::SlackpackError>(())
/// ```
pub fn load_users(bytes: &[u8]) -> Result<UserTable> {
    Ok(parse_roster(bytes)?)
}

/// Reads and parses `<root>/users.json`.
pub fn load_users_file(root: &Path) -> Result<UserTable> {
    let path = root.join(ROSTER_FILE);
    let bytes =
        fs::read(&path).map_err(|e| SlackpackError::io("read roster file", &path, e))?;
    let users = parse_roster(&bytes).map_err(|e| SlackpackError::roster_parse(e, &path))?;
    debug!(path = %path.display(), users = users.len(), "loaded roster");
    Ok(users)
}

/// Lists channel names: the immediate subdirectories of the archive root.
///
/// Plain files (including the roster) are skipped, as are directories whose
/// names are not valid UTF-8.
pub fn list_channels(root: &Path) -> Result<Vec<String>> {
    let mut channels = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => channels.push(name.to_string()),
            None => warn!(
                path = %entry.path().display(),
                "skipping channel directory with non-UTF-8 name"
            ),
        }
    }
    Ok(channels)
}

/// Reads every daily batch file in a channel directory, in file name order,
/// and concatenates their records in file order.
///
/// Any unreadable or malformed file fails the whole call. Subdirectories are
/// ignored.
pub fn load_channel_batches(dir: &Path) -> Result<Vec<RawMessage>> {
    Ok(load_channel_files(dir)?
        .into_iter()
        .flat_map(|(_, records)| records)
        .collect())
}

/// Like [`load_channel_batches`], keeping each batch with the file it came from.
pub fn load_channel_files(dir: &Path) -> Result<Vec<(PathBuf, Vec<RawMessage>)>> {
    let mut batches = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.into_path();
        let bytes =
            fs::read(&path).map_err(|e| SlackpackError::io("read message batch", &path, e))?;
        let records: Vec<RawMessage> =
            serde_json::from_slice(&bytes).map_err(|e| SlackpackError::batch_parse(e, &path))?;
        debug!(path = %path.display(), records = records.len(), "loaded batch");
        batches.push((path, records));
    }
    Ok(batches)
}
