//! Playback data model
//!
//! The cyclic playlist and the per-track state reported by the synthesizer.

mod playlist;
mod track;

pub use playlist::{Playlist, PlaylistError};
pub use track::{file_name, TrackInfo, TrackRow};
