//! Phase sound cues.
//!
//! `SoundBoard` owns one optional clip per non-idle phase and plays it when
//! the session announces that phase. Playback goes through an
//! [`AudioBackend`]: an external player process by default, or rodio when
//! built with the `rodio` feature.

mod backend;
mod board;
mod clip;

#[cfg(feature = "rodio")]
pub use backend::RodioBackend;
pub use backend::{default_player, AudioBackend, CommandBackend};
pub use board::{ErrorQueue, SoundBoard, DEFAULT_MIN_REPLAY, MAX_QUEUED_ERRORS};
pub use clip::SoundClip;

use std::path::PathBuf;

use thiserror::Error;

use crate::breath::Phase;

/// Errors raised while loading or playing a phase sound.
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("phase '{phase}' cannot have a sound")]
    UnsupportedPhase { phase: Phase },

    #[error("sound file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read sound file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start player '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("playback of '{name}' failed: {message}")]
    Playback { name: String, message: String },
}
