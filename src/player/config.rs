//! Player configuration
//!
//! Remembers the last sound font, MIDI file and playlist between runs.

use crate::model::Playlist;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings restored at startup and saved when playback stops
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Last sound font loaded (.sf2)
    pub sound_font_path: Option<PathBuf>,

    /// Last MIDI file loaded, played when the playlist is empty
    pub midi_file_path: Option<PathBuf>,

    /// Playlist entries in insertion order
    pub playlist: Vec<String>,
}

impl PlayerConfig {
    /// Load the configuration, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;

        log::debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let text = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, text).with_context(|| format!("Failed to write config: {:?}", path))?;

        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Set the sound font path
    pub fn with_sound_font(mut self, path: PathBuf) -> Self {
        self.sound_font_path = Some(path);
        self
    }

    /// Set the MIDI file path
    pub fn with_midi_file(mut self, path: PathBuf) -> Self {
        self.midi_file_path = Some(path);
        self
    }

    /// A sound font is configured and still on disk
    pub fn has_sound_font(&self) -> bool {
        self.sound_font_path.as_deref().is_some_and(Path::is_file)
    }

    /// A MIDI file is configured and still on disk
    pub fn has_midi_file(&self) -> bool {
        self.midi_file_path.as_deref().is_some_and(Path::is_file)
    }

    /// Directory to open the sound font picker in
    pub fn sound_font_dir(&self) -> Option<&Path> {
        self.sound_font_path.as_deref().and_then(Path::parent)
    }

    /// Directory to open the MIDI file picker in
    pub fn midi_file_dir(&self) -> Option<&Path> {
        self.midi_file_path.as_deref().and_then(Path::parent)
    }

    /// Rebuild a fresh playlist from the saved entries
    pub fn build_playlist(&self) -> Playlist {
        self.playlist.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = TempDir::new().unwrap();
        let config = PlayerConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = PlayerConfig::default()
            .with_sound_font(PathBuf::from("/sf/GeneralUser.sf2"))
            .with_midi_file(PathBuf::from("/midi/song.mid"));
        config.playlist.push("/midi/a.mid".to_string());
        config.playlist.push("/midi/b.mid".to_string());

        config.save(&path).unwrap();
        assert_eq!(PlayerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "midi_file_path": "/midi/x.mid" }"#).unwrap();

        let config = PlayerConfig::load(&path).unwrap();
        assert_eq!(config.midi_file_path, Some(PathBuf::from("/midi/x.mid")));
        assert!(config.sound_font_path.is_none());
        assert!(config.playlist.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(PlayerConfig::load(&path).is_err());
    }

    #[test]
    fn test_existence_checks() {
        let dir = TempDir::new().unwrap();
        let sf = dir.path().join("font.sf2");
        fs::write(&sf, b"sf2").unwrap();

        let config = PlayerConfig::default()
            .with_sound_font(sf)
            .with_midi_file(dir.path().join("gone.mid"));

        assert!(config.has_sound_font());
        assert!(!config.has_midi_file());
        assert_eq!(config.sound_font_dir(), Some(dir.path()));
        assert_eq!(config.midi_file_dir(), Some(dir.path()));
    }

    #[test]
    fn test_build_playlist_keeps_order() {
        let config = PlayerConfig {
            playlist: vec!["a.mid".to_string(), "b.mid".to_string()],
            ..Default::default()
        };

        let mut playlist = config.build_playlist();
        assert_eq!(playlist.next_track().unwrap(), "a.mid");
        assert_eq!(playlist.next_track().unwrap(), "b.mid");
    }
}
