//! Phase rotation resolver.
//!
//! Picks the next phase to enter by walking the fixed rotation, skipping
//! every zero-duration phase. The walk is bounded by the rotation length, so
//! even all-zero durations terminate.

use super::cue::Cue;
use super::phase::{Phase, PhaseDurations};

/// Outcome of one resolver walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub phase: Phase,
    pub remaining: u32,
    /// The walk crossed into `Inhale`, closing one respiration cycle.
    pub cycle_completed: bool,
}

/// Resolves the phase that follows `current`.
///
/// Appends a `PhaseSkipped` cue for every zero-duration candidate and a
/// `PhaseStart` cue for the selected one, in walk order. From `Idle` this is
/// the initial selection.
pub fn resolve_next(current: Phase, durations: &PhaseDurations, cues: &mut Vec<Cue>) -> Resolution {
    if current.is_idle() {
        return select_initial(durations, cues);
    }

    let mut candidate = current;
    let mut cycle_completed = false;
    for _ in 0..Phase::ROTATION.len() {
        candidate = candidate.successor();
        if candidate == Phase::Inhale {
            cycle_completed = true;
        }
        if let Some(resolution) = try_enter(candidate, durations, cycle_completed, cues) {
            return resolution;
        }
    }

    // Every phase is zero: park on a zero-length inhale so the countdown
    // driver resolves again on its next turn.
    Resolution {
        phase: Phase::Inhale,
        remaining: 0,
        cycle_completed: true,
    }
}

/// Selects the first phase of a fresh session, scanning from `Inhale`.
///
/// With every duration zero the session still enters a zero-length
/// `Inhale`, announced after the four skips.
pub fn select_initial(durations: &PhaseDurations, cues: &mut Vec<Cue>) -> Resolution {
    Phase::ROTATION
        .iter()
        .find_map(|phase| try_enter(*phase, durations, false, cues))
        .unwrap_or_else(|| {
            cues.push(Cue::PhaseStart(Phase::Inhale));
            Resolution {
                phase: Phase::Inhale,
                remaining: 0,
                cycle_completed: false,
            }
        })
}

fn try_enter(
    candidate: Phase,
    durations: &PhaseDurations,
    cycle_completed: bool,
    cues: &mut Vec<Cue>,
) -> Option<Resolution> {
    let seconds = durations.get(candidate);
    if seconds == 0 {
        cues.push(Cue::PhaseSkipped(candidate));
        return None;
    }
    cues.push(Cue::PhaseStart(candidate));
    Some(Resolution {
        phase: candidate,
        remaining: seconds,
        cycle_completed,
    })
}
