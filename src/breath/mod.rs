//! Breathing phases, the rotation resolver and cue notifications.
//!
//! Everything here is free of I/O and timing; the session controller drives
//! it and the presentation layer renders it.

mod cue;
mod phase;
mod resolver;

pub use cue::{Cue, CueSink};
pub use phase::{clamp_seconds, DurationField, ParsePhaseError, Phase, PhaseDurations};
pub use resolver::{resolve_next, select_initial, Resolution};
