use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::breath::{Phase, PhaseDurations};
use crate::sound::{default_player, DEFAULT_MIN_REPLAY};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting durations.
    pub durations: PhaseDurations,
    pub sound: SoundConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    /// Appended to the built-in preset catalog.
    pub presets: Vec<PresetConfig>,
}

/// Sound cue playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    /// External player program. Platform default when omitted.
    pub player: Option<String>,
    /// Arguments passed before the clip path.
    pub player_args: Vec<String>,
    /// Minimum gap between two plays of the same phase clip.
    pub min_replay_ms: u64,
    /// Clips assigned at startup.
    pub clips: SoundClips,
}

impl SoundConfig {
    pub fn player(&self) -> &str {
        self.player.as_deref().unwrap_or(default_player())
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            player: None,
            player_args: Vec::new(),
            min_replay_ms: DEFAULT_MIN_REPLAY.as_millis() as u64,
            clips: SoundClips::default(),
        }
    }
}

/// Sound file per phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundClips {
    pub inhale: Option<PathBuf>,
    pub hold_in: Option<PathBuf>,
    pub exhale: Option<PathBuf>,
    pub hold_out: Option<PathBuf>,
}

impl SoundClips {
    pub fn get(&self, phase: Phase) -> Option<&Path> {
        match phase {
            Phase::Idle => None,
            Phase::Inhale => self.inhale.as_deref(),
            Phase::HoldIn => self.hold_in.as_deref(),
            Phase::Exhale => self.exhale.as_deref(),
            Phase::HoldOut => self.hold_out.as_deref(),
        }
    }

    pub fn set(&mut self, phase: Phase, path: PathBuf) {
        match phase {
            Phase::Idle => {}
            Phase::Inhale => self.inhale = Some(path),
            Phase::HoldIn => self.hold_in = Some(path),
            Phase::Exhale => self.exhale = Some(path),
            Phase::HoldOut => self.hold_out = Some(path),
        }
    }

    /// Assigned clips in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, &Path)> {
        Phase::ROTATION
            .into_iter()
            .filter_map(|phase| self.get(phase).map(|path| (phase, path)))
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw and input poll interval.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// Log output.
///
/// `BREATHWORK_LOG` overrides `file`, `RUST_LOG` overrides `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// A user-defined preset. Omitted durations take the usual defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetConfig {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub durations: PhaseDurations,
}
