//! Synthesizer trait definition

use anyhow::Result;
use std::path::Path;

/// Synthesizer trait - allows swapping between the stub and a real engine
pub trait Synthesizer {
    /// Set the sound font used for subsequent playback
    fn set_sound_font(&mut self, path: &Path);

    /// Currently loaded sound font
    fn sound_font(&self) -> Option<&Path>;

    /// Set the MIDI file played by the next `start`
    fn set_midi_file(&mut self, path: &Path);

    /// Currently loaded MIDI file
    fn midi_file(&self) -> Option<&Path>;

    /// Start playing the current MIDI file
    fn start(&mut self) -> Result<()>;

    /// Stop playback (no-op when already stopped)
    fn stop(&mut self) -> Result<()>;

    fn is_playing(&self) -> bool;

    /// Number of tracks in the current file, conductor track excluded
    fn track_count(&self) -> usize;

    /// Name of the voice assigned to a track, if the sound font has one
    fn voice_name(&self, track_index: usize) -> Option<String>;
}
