//! Structured (JSON) output writer.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::SecondsFormat;
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::create_dir;
use crate::Message;
use crate::error::{Result, SlackpackError};

/// Output record: the time is rendered as RFC 3339 with the zone's offset.
#[derive(Serialize)]
struct StructuredMessage<'a> {
    user: &'a str,
    text: &'a str,
    time: String,
}

impl<'a> StructuredMessage<'a> {
    fn from_message(msg: &'a Message) -> Self {
        Self {
            user: &msg.user,
            text: &msg.text,
            time: msg.time.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// Serializes into memory. Disk errors surface from the caller, bound to a path.
fn render(messages: &[Message]) -> Result<Vec<u8>> {
    let records: Vec<StructuredMessage<'_>> =
        messages.iter().map(StructuredMessage::from_message).collect();
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Renders messages as a tab-indented JSON array.
///
/// # Format
/// ```json
/// [
/// 	{
/// 		"user": "Alice",
/// 		"text": "hello",
/// 		"time": "2021-01-01T00:00:00Z"
/// 	}
/// ]
/// ```
pub fn to_structured(messages: &[Message]) -> Result<String> {
    String::from_utf8(render(messages)?)
        .map_err(|e| SlackpackError::Json(serde_json::Error::custom(e)))
}

/// Writes `<dir>/<channel>.json`, creating `dir` if needed. Returns the path.
pub fn write_structured(dir: &Path, channel: &str, messages: &[Message]) -> Result<PathBuf> {
    create_dir(dir)?;
    let body = render(messages)?;
    let path = dir.join(format!("{channel}.json"));
    let mut file =
        File::create(&path).map_err(|e| SlackpackError::io("create output file", &path, e))?;
    file.write_all(&body)
        .and_then(|()| file.flush())
        .map_err(|e| SlackpackError::io("write output file", &path, e))?;
    Ok(path)
}
