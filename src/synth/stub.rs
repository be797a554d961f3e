//! In-memory synthesizer
//!
//! Makes no sound. Records what it was asked to play and reports the same
//! events a real engine would, so the player can be driven without audio.

use super::events::{SynthEvent, SynthEventBus};
use super::traits::Synthesizer;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Stub synthesizer that logs playback instead of rendering it
pub struct StubSynth {
    bus: SynthEventBus,
    sound_font: Option<PathBuf>,
    midi_file: Option<PathBuf>,
    playing: bool,
    track_count: usize,
    voices: Vec<String>,

    /// Every file started, in order
    history: Vec<PathBuf>,
}

impl StubSynth {
    pub fn new(bus: SynthEventBus) -> Self {
        Self {
            bus,
            sound_font: None,
            midi_file: None,
            playing: false,
            track_count: 0,
            voices: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Report this many tracks for every file
    pub fn with_track_count(mut self, count: usize) -> Self {
        self.track_count = count;
        self
    }

    /// Voice names by track (first entry is track 1)
    pub fn with_voices(mut self, voices: Vec<String>) -> Self {
        self.voices = voices;
        self
    }

    /// Simulate the current song reaching its end
    pub fn finish(&mut self) {
        if !self.playing {
            log::debug!("finish() while stopped, ignoring");
            return;
        }
        self.playing = false;
        self.bus.publish(SynthEvent::Ended);
    }

    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }
}

impl Synthesizer for StubSynth {
    fn set_sound_font(&mut self, path: &Path) {
        self.sound_font = Some(path.to_path_buf());
    }

    fn sound_font(&self) -> Option<&Path> {
        self.sound_font.as_deref()
    }

    fn set_midi_file(&mut self, path: &Path) {
        self.midi_file = Some(path.to_path_buf());
    }

    fn midi_file(&self) -> Option<&Path> {
        self.midi_file.as_deref()
    }

    fn start(&mut self) -> Result<()> {
        let Some(midi_file) = self.midi_file.clone() else {
            bail!("No MIDI file loaded");
        };

        log::info!("Stub synth playing: {:?}", midi_file);
        self.playing = true;
        self.history.push(midi_file);
        self.bus.publish(SynthEvent::Started);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.playing {
            log::debug!("Stub synth stopped");
        }
        self.playing = false;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn track_count(&self) -> usize {
        self.track_count
    }

    fn voice_name(&self, track_index: usize) -> Option<String> {
        track_index
            .checked_sub(1)
            .and_then(|i| self.voices.get(i))
            .cloned()
    }
}
