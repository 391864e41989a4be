// Channel reader: fetches a flat listing of a channel's latest uploads
// through the `yt-dlp` binary and renders it as indented JSON.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ChannelConfig;

/// Upper bound on the entries returned by `get_channel_info`.
pub const MAX_ENTRIES: usize = 9;
/// Playlist window requested from the extractor.
pub const PLAYLIST_ITEMS: &str = "1-10";

/// Anything that can turn a channel URL into yt-dlp style info JSON.
/// Failures are swallowed and reported as `None`.
pub trait ChannelExtractor {
    fn extract(&self, url: &str) -> Option<Value>;
}

/// Extractor backed by the `yt-dlp` command line tool.
pub struct YtDlp {
    binary: PathBuf,
}

impl YtDlp {
    pub fn new(config: &ChannelConfig) -> Self {
        YtDlp {
            binary: config.ytdlp_path.clone(),
        }
    }

    /// Flat extraction of the first playlist window, errors and warnings suppressed.
    fn build_args(url: &str) -> Vec<String> {
        vec![
            "--dump-single-json".into(),
            "--flat-playlist".into(),
            "--ignore-errors".into(),
            "--no-warnings".into(),
            "--playlist-items".into(),
            PLAYLIST_ITEMS.into(),
            url.into(),
        ]
    }
}

impl ChannelExtractor for YtDlp {
    fn extract(&self, url: &str) -> Option<Value> {
        debug!("running {} for {}", self.binary.display(), url);
        let output = match Command::new(&self.binary).args(Self::build_args(url)).output() {
            Ok(out) => out,
            Err(e) => {
                warn!("failed to run {}: {}", self.binary.display(), e);
                return None;
            }
        };
        // --ignore-errors can still exit non-zero after printing usable JSON.
        if !output.status.success() {
            debug!("yt-dlp exited with {}", output.status);
        }
        match serde_json::from_slice(&output.stdout) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("yt-dlp produced no usable JSON for {}: {}", url, e);
                None
            }
        }
    }
}

pub fn channel_url(handle: &str) -> String {
    format!("https://www.youtube.com/@{}", handle)
}

/// Up to `MAX_ENTRIES` entries of the channel's playlist. Empty when the
/// extractor fails or reports no entries.
pub fn get_channel_info(extractor: &dyn ChannelExtractor, handle: &str) -> Vec<Value> {
    let info = extractor.extract(&channel_url(handle));
    let mut entries = match info {
        Some(Value::Object(mut map)) => match map.remove("entries") {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    entries.truncate(MAX_ENTRIES);
    entries
}

/// Pretty JSON with four-space indentation.
pub fn to_indented_json(entries: &[Value]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    entries
        .serialize(&mut ser)
        .context("Serializing channel info")?;
    String::from_utf8(buf).context("Channel info is not valid UTF-8")
}

pub fn dump_info(entries: &[Value]) -> Result<()> {
    println!("Dumping Channel Info:");
    println!("{}", to_indented_json(entries)?);
    Ok(())
}

/// Write the entries to `path`, replacing any existing file.
pub fn write_info(entries: &[Value], handle: &str, path: &Path) -> Result<()> {
    let json = to_indented_json(entries)?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write!(file, "Channel Information for @{}:\n{}", handle, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Channel info written to file: {}", path.display());
    Ok(())
}
