//! Host-side player: configuration, file discovery and playback control

pub mod config;
pub mod controller;
pub mod discovery;

pub use config::PlayerConfig;
pub use controller::PlaybackController;
pub use discovery::{is_midi_file, scan_midi_files};
