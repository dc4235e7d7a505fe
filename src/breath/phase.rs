use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Breathing phase of a session.
///
/// `Idle` is the only non-cycling value; the other four form the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

impl Phase {
    /// Fixed rotation order. Wraps from `HoldOut` back to `Inhale`.
    pub const ROTATION: [Phase; 4] = [Phase::Inhale, Phase::HoldIn, Phase::Exhale, Phase::HoldOut];

    /// Next phase in the rotation. `Idle` enters the rotation at `Inhale`.
    pub fn successor(self) -> Phase {
        match self {
            Phase::Idle | Phase::HoldOut => Phase::Inhale,
            Phase::Inhale => Phase::HoldIn,
            Phase::HoldIn => Phase::Exhale,
            Phase::Exhale => Phase::HoldOut,
        }
    }

    pub fn is_idle(self) -> bool {
        self == Phase::Idle
    }

    /// Upper-case identifier used in cue labels and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "IDLE",
            Phase::Inhale => "INHALE",
            Phase::HoldIn => "HOLD_IN",
            Phase::Exhale => "EXHALE",
            Phase::HoldOut => "HOLD_OUT",
        }
    }

    /// Instruction shown to the user while the phase is active.
    pub fn instruction(self) -> &'static str {
        match self {
            Phase::Idle => "Ready to begin?",
            Phase::Inhale => "Breathe in...",
            Phase::HoldIn => "Hold (full)...",
            Phase::Exhale => "Breathe out...",
            Phase::HoldOut => "Hold (empty)...",
        }
    }

    /// Short label for settings rows.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Inhale => "Inhale",
            Phase::HoldIn => "Hold (after inhale)",
            Phase::Exhale => "Exhale",
            Phase::HoldOut => "Hold (after exhale)",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown phase '{input}' (expected inhale, hold-in, exhale or hold-out)")]
pub struct ParsePhaseError {
    pub input: String,
}

impl FromStr for Phase {
    type Err = ParsePhaseError;

    /// Parses one of the four rotation phases. `idle` is rejected because
    /// nothing is ever configured for it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "inhale" => Ok(Phase::Inhale),
            "hold-in" | "holdin" => Ok(Phase::HoldIn),
            "exhale" => Ok(Phase::Exhale),
            "hold-out" | "holdout" => Ok(Phase::HoldOut),
            _ => Err(ParsePhaseError {
                input: s.to_string(),
            }),
        }
    }
}

/// One editable duration in [`PhaseDurations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationField {
    Inhale,
    HoldIn,
    Exhale,
    HoldOut,
}

impl DurationField {
    pub const ALL: [DurationField; 4] = [
        DurationField::Inhale,
        DurationField::HoldIn,
        DurationField::Exhale,
        DurationField::HoldOut,
    ];

    pub fn phase(self) -> Phase {
        match self {
            DurationField::Inhale => Phase::Inhale,
            DurationField::HoldIn => Phase::HoldIn,
            DurationField::Exhale => Phase::Exhale,
            DurationField::HoldOut => Phase::HoldOut,
        }
    }
}

/// Seconds spent in each rotation phase. Zero means the phase is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseDurations {
    #[serde(deserialize_with = "deserialize_seconds")]
    pub inhale: u32,
    #[serde(deserialize_with = "deserialize_seconds")]
    pub hold_in: u32,
    #[serde(deserialize_with = "deserialize_seconds")]
    pub exhale: u32,
    #[serde(deserialize_with = "deserialize_seconds")]
    pub hold_out: u32,
}

impl PhaseDurations {
    pub const fn new(inhale: u32, hold_in: u32, exhale: u32, hold_out: u32) -> Self {
        Self {
            inhale,
            hold_in,
            exhale,
            hold_out,
        }
    }

    /// Duration of `phase` in seconds. `Idle` has none.
    pub fn get(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Idle => 0,
            Phase::Inhale => self.inhale,
            Phase::HoldIn => self.hold_in,
            Phase::Exhale => self.exhale,
            Phase::HoldOut => self.hold_out,
        }
    }

    pub fn field(&self, field: DurationField) -> u32 {
        self.get(field.phase())
    }

    /// Stores `value`, clamping negative input to zero.
    pub fn set(&mut self, field: DurationField, value: i64) {
        let value = clamp_seconds(value);
        match field {
            DurationField::Inhale => self.inhale = value,
            DurationField::HoldIn => self.hold_in = value,
            DurationField::Exhale => self.exhale = value,
            DurationField::HoldOut => self.hold_out = value,
        }
    }

    pub fn is_all_zero(&self) -> bool {
        Phase::ROTATION.iter().all(|phase| self.get(*phase) == 0)
    }

    pub fn cycle_seconds(&self) -> u64 {
        Phase::ROTATION
            .iter()
            .map(|phase| u64::from(self.get(*phase)))
            .sum()
    }
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self::new(4, 4, 6, 2)
    }
}

impl fmt::Display for PhaseDurations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.inhale, self.hold_in, self.exhale, self.hold_out
        )
    }
}

/// Saturates a signed seconds value into the stored range.
pub fn clamp_seconds(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Reads a signed seconds value and clamps it like [`PhaseDurations::set`].
fn deserialize_seconds<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_wraps_after_hold_out() {
        assert_eq!(Phase::Inhale.successor(), Phase::HoldIn);
        assert_eq!(Phase::HoldIn.successor(), Phase::Exhale);
        assert_eq!(Phase::Exhale.successor(), Phase::HoldOut);
        assert_eq!(Phase::HoldOut.successor(), Phase::Inhale);
        assert_eq!(Phase::Idle.successor(), Phase::Inhale);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("inhale".parse::<Phase>(), Ok(Phase::Inhale));
        assert_eq!("HOLD_IN".parse::<Phase>(), Ok(Phase::HoldIn));
        assert_eq!("hold-out".parse::<Phase>(), Ok(Phase::HoldOut));
        assert_eq!(" Exhale ".parse::<Phase>(), Ok(Phase::Exhale));
        assert!("idle".parse::<Phase>().is_err());
        assert!("breathe".parse::<Phase>().is_err());
    }

    #[test]
    fn set_clamps_negative_to_zero() {
        let mut durations = PhaseDurations::default();
        durations.set(DurationField::Exhale, -5);
        assert_eq!(durations.exhale, 0);
        durations.set(DurationField::Exhale, 9);
        assert_eq!(durations.field(DurationField::Exhale), 9);
    }

    #[test]
    fn clamp_seconds_saturates() {
        assert_eq!(clamp_seconds(-1), 0);
        assert_eq!(clamp_seconds(42), 42);
        assert_eq!(clamp_seconds(i64::MAX), u32::MAX);
    }

    #[test]
    fn durations_summary() {
        let durations = PhaseDurations::new(4, 7, 8, 0);
        assert_eq!(durations.to_string(), "4-7-8-0");
        assert_eq!(durations.cycle_seconds(), 19);
        assert!(!durations.is_all_zero());
        assert!(PhaseDurations::new(0, 0, 0, 0).is_all_zero());
    }
}
