//! Notifications sent to the sound-cue collaborator.

use std::fmt;

use super::phase::Phase;

/// A cue emitted by the session controller.
///
/// Only phase events carry a phase; session-level events never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    ExerciseStart,
    ExerciseResume,
    ExercisePause,
    ExerciseReset,
    /// Durations were replaced by a preset. `preset` is the matching catalog
    /// id, `None` when the bundle matches no known preset.
    PresetSelected { preset: Option<String> },
    PhaseStart(Phase),
    PhaseSkipped(Phase),
}

impl Cue {
    /// The phase this cue refers to, for phase start/skip events only.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Cue::PhaseStart(phase) | Cue::PhaseSkipped(phase) => Some(*phase),
            _ => None,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Cue::ExerciseStart => "Exercise Start",
            Cue::ExerciseResume => "Exercise Resume",
            Cue::ExercisePause => "Exercise Pause",
            Cue::ExerciseReset => "Exercise Reset",
            Cue::PresetSelected { .. } => "Preset Selected",
            Cue::PhaseStart(_) => "Phase Start",
            Cue::PhaseSkipped(_) => "Phase Skipped (0s)",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cue::PresetSelected { preset } => {
                write!(f, "{}: {}", self.action(), preset.as_deref().unwrap_or("Custom"))
            }
            Cue::PhaseStart(phase) | Cue::PhaseSkipped(phase) => {
                write!(f, "{}: {}", self.action(), phase)
            }
            _ => f.write_str(self.action()),
        }
    }
}

/// Receiver of session cues.
///
/// Implementations must not block and must never fail back into the
/// caller: `notify` runs while the controller holds its state lock.
pub trait CueSink: Send + Sync {
    fn notify(&self, cue: &Cue);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_phase_events_carry_a_phase() {
        assert_eq!(Cue::PhaseStart(Phase::Exhale).phase(), Some(Phase::Exhale));
        assert_eq!(Cue::PhaseSkipped(Phase::HoldIn).phase(), Some(Phase::HoldIn));
        assert_eq!(Cue::ExerciseStart.phase(), None);
        assert_eq!(Cue::PresetSelected { preset: None }.phase(), None);
    }

    #[test]
    fn display_matches_log_labels() {
        assert_eq!(Cue::PhaseStart(Phase::Inhale).to_string(), "Phase Start: INHALE");
        assert_eq!(
            Cue::PhaseSkipped(Phase::HoldOut).to_string(),
            "Phase Skipped (0s): HOLD_OUT"
        );
        assert_eq!(
            Cue::PresetSelected {
                preset: Some("anti-stress".to_string())
            }
            .to_string(),
            "Preset Selected: anti-stress"
        );
        assert_eq!(
            Cue::PresetSelected { preset: None }.to_string(),
            "Preset Selected: Custom"
        );
        assert_eq!(Cue::ExerciseReset.to_string(), "Exercise Reset");
    }
}
