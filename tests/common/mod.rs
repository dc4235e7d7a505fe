//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

use breathwork::breath::{Cue, CueSink, Phase, PhaseDurations};
use breathwork::mvi::Reducer;
use breathwork::session::{BreathingModel, SessionController, SessionIntent, SessionReducer};
use breathwork::sound::{AudioBackend, ErrorQueue, SoundClip, SoundError};
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Cue sink that remembers everything it was told.
#[derive(Default)]
pub struct RecordingSink {
    cues: Mutex<Vec<Cue>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Cues received since the last call.
    pub fn take(&self) -> Vec<Cue> {
        std::mem::take(&mut *self.cues.lock())
    }

    pub fn phase_cues(&self) -> Vec<Cue> {
        self.cues
            .lock()
            .iter()
            .filter(|cue| cue.phase().is_some())
            .cloned()
            .collect()
    }
}

impl CueSink for RecordingSink {
    fn notify(&self, cue: &Cue) {
        self.cues.lock().push(cue.clone());
    }
}

/// Run one intent through the session reducer.
pub fn reduce(model: BreathingModel, intent: SessionIntent) -> (BreathingModel, Vec<Cue>) {
    let mut cues = Vec::new();
    let model = SessionReducer::reduce(model, intent, &mut cues);
    (model, cues)
}

/// Apply intents in order, returning the final model and all cues.
pub fn reduce_all(
    model: BreathingModel,
    intents: impl IntoIterator<Item = SessionIntent>,
) -> (BreathingModel, Vec<Cue>) {
    let mut cues = Vec::new();
    let mut model = model;
    for intent in intents {
        model = SessionReducer::reduce(model, intent, &mut cues);
    }
    (model, cues)
}

pub fn durations(inhale: u32, hold_in: u32, exhale: u32, hold_out: u32) -> PhaseDurations {
    PhaseDurations::new(inhale, hold_in, exhale, hold_out)
}

/// Controller on the current tokio runtime with a recording sink.
pub fn controller(durations: PhaseDurations) -> (SessionController, Arc<RecordingSink>) {
    let sink = RecordingSink::new();
    let controller = SessionController::new(
        BreathingModel::new(durations),
        sink.clone(),
        tokio::runtime::Handle::current(),
    );
    (controller, sink)
}

/// Let spawned tasks run without advancing the paused clock.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Create a small fake sound file.
pub fn sound_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create sound file");
    file.write_all(b"RIFF0000WAVE").expect("Failed to write sound file");
    path
}

/// Audio backend that records clip names instead of playing them.
#[derive(Default)]
pub struct FakeBackend {
    played: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            played: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn played(&self) -> Vec<String> {
        self.played.lock().clone()
    }
}

impl AudioBackend for FakeBackend {
    fn play(&self, clip: &SoundClip, _errors: &ErrorQueue) -> Result<(), SoundError> {
        if self.fail {
            return Err(SoundError::Playback {
                name: clip.name().to_string(),
                message: "device unavailable".to_string(),
            });
        }
        self.played.lock().push(clip.name().to_string());
        Ok(())
    }
}
