//! MIDI Playlist - round-robin MIDI playback control
//!
//! This library keeps a cyclic playlist of MIDI files and drives an
//! external synthesizer through it, advancing to the next file whenever
//! the synthesizer reports that a song has ended.

pub mod model;
pub mod player;
pub mod synth;

pub use model::{Playlist, PlaylistError};
pub use player::{PlaybackController, PlayerConfig};
