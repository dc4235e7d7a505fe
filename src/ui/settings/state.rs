use crate::breath::{DurationField, Phase};
use crate::mvi::Model;

/// Upper bound for a duration edited in the panel.
pub const MAX_DURATION_SECS: i64 = 120;

/// Duration after one panel step of `delta` seconds.
///
/// Steps stop at `0..=MAX_DURATION_SECS`. A value already past the upper
/// bound (set from the command line or config) is left alone by an increase
/// and decreases one step at a time.
pub fn step_duration(current: u32, delta: i64) -> i64 {
    let current = i64::from(current);
    let next = current + delta;
    if delta > 0 {
        next.min(MAX_DURATION_SECS.max(current))
    } else {
        next.max(0)
    }
}

/// What a panel row edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    /// Index into the preset catalog.
    Preset(usize),
    Duration(DurationField),
    Sound(Phase),
}

impl SettingsRow {
    /// Rows top to bottom: presets, durations, then sounds.
    pub fn all(preset_count: usize) -> Vec<SettingsRow> {
        let presets = (0..preset_count).map(SettingsRow::Preset);
        let durations = DurationField::ALL.into_iter().map(SettingsRow::Duration);
        let sounds = Phase::ROTATION.into_iter().map(SettingsRow::Sound);
        presets.chain(durations).chain(sounds).collect()
    }

    pub fn at(index: usize, preset_count: usize) -> Option<SettingsRow> {
        if index < preset_count {
            return Some(SettingsRow::Preset(index));
        }
        let index = index - preset_count;
        if let Some(field) = DurationField::ALL.get(index) {
            return Some(SettingsRow::Duration(*field));
        }
        Phase::ROTATION
            .get(index - DurationField::ALL.len())
            .map(|phase| SettingsRow::Sound(*phase))
    }

    pub fn count(preset_count: usize) -> usize {
        preset_count + DurationField::ALL.len() + Phase::ROTATION.len()
    }
}

/// In-progress sound path entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEditor {
    pub phase: Phase,
    pub buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsPanelState {
    #[default]
    Hidden,
    Visible {
        preset_count: usize,
        focused: usize,
        /// Session running: rows are shown but not editable.
        locked: bool,
        editor: Option<PathEditor>,
    },
}

impl Model for SettingsPanelState {}

impl SettingsPanelState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn focused_row(&self) -> Option<SettingsRow> {
        match self {
            Self::Visible {
                preset_count,
                focused,
                ..
            } => SettingsRow::at(*focused, *preset_count),
            Self::Hidden => None,
        }
    }

    pub fn editor(&self) -> Option<&PathEditor> {
        match self {
            Self::Visible { editor, .. } => editor.as_ref(),
            Self::Hidden => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Visible { locked: true, .. })
    }
}
