use serde::{Deserialize, Serialize};
use std::path::Path;

/// State of a single MIDI track as reported by the synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    /// Track index in the MIDI file (0 is the conductor track)
    pub index: usize,

    /// Track name from the sequence name meta event
    pub name: String,

    /// MIDI channel (0-15)
    pub channel: u8,

    /// Bank select value
    pub bank: u16,

    /// Program change value
    pub program: u8,

    /// Whether a note is currently sounding on this track
    pub sounds: bool,
}

/// One row of the track table shown while a song plays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    /// Lit while the track is sounding
    pub sounding: bool,
    pub name: String,
    pub voice: String,
    pub channel: String,
    pub bank: String,
    pub program: String,
}

const PLACEHOLDER: &str = "--";

impl TrackRow {
    /// Row shown before the synthesizer reports anything for the track
    pub fn placeholder() -> Self {
        Self {
            sounding: false,
            name: PLACEHOLDER.to_string(),
            voice: PLACEHOLDER.to_string(),
            channel: PLACEHOLDER.to_string(),
            bank: PLACEHOLDER.to_string(),
            program: PLACEHOLDER.to_string(),
        }
    }

    /// Build a row from a track update and its resolved voice name
    pub fn from_info(info: &TrackInfo, voice: Option<String>) -> Self {
        Self {
            sounding: info.sounds,
            name: info.name.clone(),
            voice: voice.unwrap_or_else(|| PLACEHOLDER.to_string()),
            channel: info.channel.to_string(),
            bank: info.bank.to_string(),
            program: info.program.to_string(),
        }
    }
}

/// File name component of a path, for titles and log lines
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
