//! Catalog of named duration bundles.
//!
//! The session core never looks at presets; the presentation layer uses the
//! catalog for its settings surface and to highlight the preset that matches
//! the active durations.

use crate::breath::PhaseDurations;
use crate::config::PresetConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub durations: PhaseDurations,
}

impl Preset {
    pub fn new(id: &str, name: &str, description: &str, durations: PhaseDurations) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            durations,
        }
    }
}

impl From<&PresetConfig> for Preset {
    fn from(config: &PresetConfig) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone().unwrap_or_else(|| config.id.clone()),
            description: config.description.clone(),
            durations: config.durations,
        }
    }
}

/// Ids of the presets that ship with the binary.
pub const BUILTIN_IDS: [&str; 4] = ["anti-stress", "square-breath", "deep-calm", "energizing"];

pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new(
            "anti-stress",
            "Anti-Stress (4-7-8)",
            "Eases anxiety with the 4-7-8 technique.",
            PhaseDurations::new(4, 7, 8, 0),
        ),
        Preset::new(
            "square-breath",
            "Box Breathing",
            "Balances the nervous system with four equal sides.",
            PhaseDurations::new(4, 4, 4, 4),
        ),
        Preset::new(
            "deep-calm",
            "Deep Calm",
            "Steady, balanced breathing for focus and presence.",
            PhaseDurations::new(5, 5, 5, 5),
        ),
        Preset::new(
            "energizing",
            "Quick Energizer",
            "Raises alertness and mental energy.",
            PhaseDurations::new(3, 0, 3, 0),
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    /// Built-ins followed by the user's presets, in config order.
    pub fn with_user_presets(user: &[PresetConfig]) -> Self {
        let mut presets = builtin_presets();
        presets.extend(user.iter().map(Preset::from));
        Self::new(presets)
    }

    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    /// First preset whose four durations all equal `durations`.
    pub fn matching(&self, durations: &PhaseDurations) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.durations == *durations)
    }

    pub fn get(&self, index: usize) -> Option<&Preset> {
        self.presets.get(index)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.presets.iter().map(|preset| preset.id.as_str()).collect()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::new(builtin_presets())
    }
}
