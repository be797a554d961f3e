//! Synthesizer abstraction
//!
//! The synthesizer itself (voice rendering, MIDI event dispatch) lives
//! outside this crate. This module defines the trait the player drives it
//! through and the events it reports back, plus an in-memory stub.

mod events;
mod stub;
mod traits;

pub use events::{SynthEvent, SynthEventBus};
pub use stub::StubSynth;
pub use traits::Synthesizer;
