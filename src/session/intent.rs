//! Intents for the breathing session.

use crate::breath::{DurationField, PhaseDurations};
use crate::mvi::Intent;

/// Intents that can be dispatched to the session reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIntent {
    /// Start from idle, or resume a paused session. No-op while running.
    Start,

    /// Stop the countdown, keeping phase and remaining time.
    Pause,

    /// Start when stopped, pause when running.
    StartPause,

    /// Back to idle with the inhale duration on the clock.
    Reset,

    /// One second of countdown elapsed.
    Tick,

    /// The current phase reached zero; resolve the next one.
    Advance,

    /// Edit one duration. Ignored while running; negative values clamp to 0.
    SetDuration { field: DurationField, value: i64 },

    /// Replace all durations. Ignored while running. `preset` is the
    /// matching catalog id, reported in the cue.
    SelectPreset {
        durations: PhaseDurations,
        preset: Option<String>,
    },
}

impl Intent for SessionIntent {}
