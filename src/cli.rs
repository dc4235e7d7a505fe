//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::breath::{DurationField, Phase, PhaseDurations};
use crate::config::SoundClips;
use crate::presets::PresetCatalog;

#[derive(Debug, Parser)]
#[command(name = "breathwork", version, about = "Guided breathing exercise timer")]
pub struct Cli {
    /// Config file (default: the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with a preset's durations
    #[arg(short, long, value_name = "ID")]
    pub preset: Option<String>,

    /// Inhale seconds
    #[arg(long, value_name = "SECS", allow_negative_numbers = true)]
    pub inhale: Option<i64>,

    /// Hold seconds after inhaling
    #[arg(long, value_name = "SECS", allow_negative_numbers = true)]
    pub hold_in: Option<i64>,

    /// Exhale seconds
    #[arg(long, value_name = "SECS", allow_negative_numbers = true)]
    pub exhale: Option<i64>,

    /// Hold seconds after exhaling
    #[arg(long, value_name = "SECS", allow_negative_numbers = true)]
    pub hold_out: Option<i64>,

    /// Sound for a phase, e.g. inhale=/path/to/bell.wav (repeatable)
    #[arg(long = "sound", value_name = "PHASE=PATH", value_parser = parse_sound)]
    pub sounds: Vec<(Phase, PathBuf)>,

    /// Disable sound cues
    #[arg(long)]
    pub mute: bool,

    /// Print phase changes to stdout instead of drawing the UI
    #[arg(long)]
    pub headless: bool,

    /// Stop after N completed cycles (headless only)
    #[arg(long, value_name = "N", requires = "headless")]
    pub cycles: Option<u64>,

    /// List available presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown preset '{id}'. Available presets: {}", available.join(", "))]
    UnknownPreset { id: String, available: Vec<String> },
}

fn parse_sound(value: &str) -> Result<(Phase, PathBuf), String> {
    let (phase, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected PHASE=PATH, got '{value}'"))?;
    let phase: Phase = phase.parse().map_err(|e| format!("{e}"))?;
    if path.is_empty() {
        return Err(format!("missing sound path for {phase}"));
    }
    Ok((phase, PathBuf::from(path)))
}

impl Cli {
    fn field_overrides(&self) -> [(DurationField, Option<i64>); 4] {
        [
            (DurationField::Inhale, self.inhale),
            (DurationField::HoldIn, self.hold_in),
            (DurationField::Exhale, self.exhale),
            (DurationField::HoldOut, self.hold_out),
        ]
    }

    /// Starting durations: field flags over `--preset` over `base`.
    pub fn durations(
        &self,
        base: PhaseDurations,
        catalog: &PresetCatalog,
    ) -> Result<PhaseDurations, CliError> {
        let mut durations = match &self.preset {
            Some(id) => {
                catalog
                    .find(id)
                    .ok_or_else(|| CliError::UnknownPreset {
                        id: id.clone(),
                        available: catalog.ids().into_iter().map(String::from).collect(),
                    })?
                    .durations
            }
            None => base,
        };

        for (field, value) in self.field_overrides() {
            if let Some(value) = value {
                durations.set(field, value);
            }
        }
        Ok(durations)
    }

    /// Layer `--sound` assignments over the configured clips.
    pub fn apply_sounds(&self, clips: &mut SoundClips) {
        for (phase, path) in &self.sounds {
            clips.set(*phase, path.clone());
        }
    }
}
