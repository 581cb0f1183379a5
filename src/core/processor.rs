//! The end-to-end conversion: load, normalize, write.
//!
//! Every channel is loaded and normalized before anything is written, so a
//! fatal error anywhere in the archive leaves no output from this run.
//! The channel list is passed explicitly from [`load_archive`] to
//! [`write_channels`]; nothing is collected in shared state.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::archive::{list_channels, load_channel_files, load_users_file};
use super::normalize::Normalizer;
use super::output::{ensure_output_dirs, write_structured, write_transcript};
use crate::config::ConvertConfig;
use crate::error::Result;
use crate::message::{Channel, UserTable};

/// Counts for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStats {
    pub name: String,
    /// Messages written.
    pub messages: usize,
    /// Records dropped by the exclusion filter.
    pub skipped: usize,
}

/// Statistics about a finished conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub users: usize,
    pub channels: Vec<ChannelStats>,
}

impl ConversionStats {
    /// Total messages written across channels.
    pub fn total_messages(&self) -> usize {
        self.channels.iter().map(|c| c.messages).sum()
    }

    /// Total records skipped across channels.
    pub fn total_skipped(&self) -> usize {
        self.channels.iter().map(|c| c.skipped).sum()
    }
}

/// Normalizes one channel directory.
pub fn process_channel(dir: &Path, name: &str, normalizer: &Normalizer<'_>) -> Result<Channel> {
    let mut messages = Vec::new();
    let mut skipped = 0;

    for (path, records) in load_channel_files(dir)? {
        for raw in &records {
            match normalizer.normalize(raw).map_err(|e| e.in_file(&path))? {
                Some(msg) => messages.push(msg),
                None => skipped += 1,
            }
        }
    }

    debug!(channel = name, messages = messages.len(), skipped, "normalized channel");
    Ok(Channel {
        name: name.to_string(),
        messages,
        skipped,
    })
}

/// Loads the roster and every channel of the archive at `root`.
pub fn load_archive(root: &Path, config: &ConvertConfig) -> Result<(UserTable, Vec<Channel>)> {
    config.validate()?;
    let channel_names = list_channels(root)?;
    let users = load_users_file(root)?;
    let normalizer = Normalizer::new(&users, config);

    let channels = channel_names
        .iter()
        .map(|name| process_channel(&root.join(name), name, &normalizer))
        .collect::<Result<Vec<_>>>()?;

    Ok((users, channels))
}

/// Writes both outputs for each channel. Returns the written paths.
pub fn write_channels(channels: &[Channel], config: &ConvertConfig) -> Result<Vec<PathBuf>> {
    ensure_output_dirs(config)?;
    let debug_dir = config.debug_dir();
    let formatted_dir = config.formatted_dir();

    let mut written = Vec::with_capacity(channels.len() * 2);
    for channel in channels {
        written.push(write_structured(&debug_dir, &channel.name, &channel.messages)?);
        written.push(write_transcript(&formatted_dir, &channel.name, &channel.messages)?);
        info!(
            channel = %channel.name,
            messages = channel.messages.len(),
            "wrote channel"
        );
    }
    Ok(written)
}

/// Full pipeline: load + normalize every channel, then write them all.
pub fn convert_archive(root: &Path, config: &ConvertConfig) -> Result<ConversionStats> {
    let (users, channels) = load_archive(root, config)?;
    write_channels(&channels, config)?;

    Ok(ConversionStats {
        users: users.len(),
        channels: channels
            .iter()
            .map(|c| ChannelStats {
                name: c.name.clone(),
                messages: c.messages.len(),
                skipped: c.skipped,
            })
            .collect(),
    })
}
