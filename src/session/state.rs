//! Session model.

use crate::breath::{Phase, PhaseDurations};
use crate::mvi::Model;

/// Countdown state owned by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub phase: Phase,
    /// Seconds left in the current phase.
    pub remaining: u32,
    /// Whether the countdown is decrementing.
    pub running: bool,
    /// Completed respiration cycles since the session started.
    pub cycle_count: u64,
}

impl SessionState {
    /// The state a fresh or reset session starts from.
    pub fn idle(durations: &PhaseDurations) -> Self {
        Self {
            phase: Phase::Idle,
            remaining: durations.inhale,
            running: false,
            cycle_count: 0,
        }
    }

    /// Running with nothing left in the current phase: the next driver turn
    /// resolves the following phase without waiting.
    pub fn is_transitioning(&self) -> bool {
        self.running && self.remaining == 0 && !self.phase.is_idle()
    }

    /// Stopped in the middle of a session.
    pub fn is_paused(&self) -> bool {
        !self.running && !self.phase.is_idle()
    }
}

/// Everything the presentation layer renders: the active durations and the
/// countdown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathingModel {
    pub durations: PhaseDurations,
    pub session: SessionState,
}

impl BreathingModel {
    pub fn new(durations: PhaseDurations) -> Self {
        Self {
            durations,
            session: SessionState::idle(&durations),
        }
    }

    /// Duration of the current phase, zero while idle.
    pub fn phase_duration(&self) -> u32 {
        self.durations.get(self.session.phase)
    }
}

impl Default for BreathingModel {
    fn default() -> Self {
        Self::new(PhaseDurations::default())
    }
}

impl Model for BreathingModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_model_is_idle_with_inhale_remaining() {
        let model = BreathingModel::new(PhaseDurations::new(5, 1, 2, 3));
        assert_eq!(model.session.phase, Phase::Idle);
        assert_eq!(model.session.remaining, 5);
        assert!(!model.session.running);
        assert_eq!(model.session.cycle_count, 0);
        assert_eq!(model.phase_duration(), 0);
    }

    #[test]
    fn transitioning_requires_running_at_zero() {
        let mut state = SessionState {
            phase: Phase::Exhale,
            remaining: 0,
            running: true,
            cycle_count: 0,
        };
        assert!(state.is_transitioning());
        state.running = false;
        assert!(!state.is_transitioning());
        assert!(state.is_paused());
    }
}
