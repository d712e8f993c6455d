//! Lander Audio - Looped sound cues (Kira backend)
//!
//! - `AudioCue` - play/pause state machine driven by actor intent
//! - `CuePlayer` - the host side of a cue: start or pause a sound
//! - `AudioEngine` - wraps Kira's AudioManager, hands out `KiraCuePlayer`s

pub mod cue;
pub mod engine;

pub use cue::{AudioCue, CuePlayer, CueTransition};
pub use engine::{AudioEngine, KiraCuePlayer};
