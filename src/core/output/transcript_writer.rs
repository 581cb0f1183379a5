//! Plain-text transcript writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, Timelike};

use super::create_dir;
use crate::Message;
use crate::error::{Result, SlackpackError};

/// Formats one transcript line (without the trailing newline).
///
/// Month is zero-padded, day is not; hour and minute are zero-padded on a
/// 24-hour clock. Fields come from the message's own zone.
///
/// # Example
/// ```text
/// 03/7 15:05 Bob: hello
/// ```
pub fn format_line(msg: &Message) -> String {
    format!(
        "{:02}/{} {:02}:{:02} {}: {}",
        msg.time.month(),
        msg.time.day(),
        msg.time.hour(),
        msg.time.minute(),
        msg.user,
        msg.text
    )
}

/// Renders the whole transcript: every line followed by a blank line.
pub fn to_transcript(messages: &[Message]) -> String {
    let mut out = String::new();
    for msg in messages {
        out.push_str(&format_line(msg));
        out.push_str("\n\n");
    }
    out
}

/// Writes `<dir>/<channel>.txt`, creating `dir` if needed. Returns the path.
pub fn write_transcript(dir: &Path, channel: &str, messages: &[Message]) -> Result<PathBuf> {
    create_dir(dir)?;
    let path = dir.join(format!("{channel}.txt"));
    let file =
        File::create(&path).map_err(|e| SlackpackError::io("create output file", &path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(to_transcript(messages).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| SlackpackError::io("write output file", &path, e))?;
    Ok(path)
}
