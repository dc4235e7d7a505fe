use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::{AudioBackend, SoundClip, SoundError};
use crate::breath::{Cue, CueSink, Phase};

/// Shortest gap between two plays of the same phase clip.
pub const DEFAULT_MIN_REPLAY: Duration = Duration::from_millis(200);

/// Most playback failures kept until the next drain. Older ones are dropped.
pub const MAX_QUEUED_ERRORS: usize = 8;

/// Playback failures waiting to be shown to the user.
#[derive(Debug, Clone, Default)]
pub struct ErrorQueue(Arc<Mutex<Vec<SoundError>>>);

impl ErrorQueue {
    pub fn push(&self, error: SoundError) {
        let mut queue = self.0.lock();
        if queue.len() >= MAX_QUEUED_ERRORS {
            let excess = queue.len() + 1 - MAX_QUEUED_ERRORS;
            queue.drain(..excess);
        }
        queue.push(error);
    }

    pub fn drain(&self) -> Vec<SoundError> {
        std::mem::take(&mut *self.0.lock())
    }
}

#[derive(Default)]
struct Slots {
    clips: HashMap<Phase, SoundClip>,
    last_played: HashMap<Phase, Instant>,
}

/// Per-phase sound assignments, and the session's production cue sink.
pub struct SoundBoard {
    backend: Arc<dyn AudioBackend>,
    slots: Mutex<Slots>,
    errors: ErrorQueue,
    enabled: AtomicBool,
    min_replay: Duration,
}

impl SoundBoard {
    pub fn new(backend: Arc<dyn AudioBackend>) -> Self {
        Self::with_min_replay(backend, DEFAULT_MIN_REPLAY)
    }

    pub fn with_min_replay(backend: Arc<dyn AudioBackend>, min_replay: Duration) -> Self {
        Self {
            backend,
            slots: Mutex::new(Slots::default()),
            errors: ErrorQueue::default(),
            enabled: AtomicBool::new(true),
            min_replay,
        }
    }

    /// Load `path` as the clip for `phase`, or clear it with `None`.
    ///
    /// A previous clip is released in both cases. On error the old clip is
    /// kept.
    pub fn assign(&self, phase: Phase, path: Option<&Path>) -> Result<(), SoundError> {
        if phase.is_idle() {
            return Err(SoundError::UnsupportedPhase { phase });
        }

        let mut slots = self.slots.lock();
        match path {
            Some(path) => {
                let clip = SoundClip::load(path)?;
                tracing::info!(%phase, clip = %clip.name(), "sound assigned");
                slots.clips.insert(phase, clip);
            }
            None => {
                if slots.clips.remove(&phase).is_some() {
                    tracing::info!(%phase, "sound cleared");
                }
            }
        }
        slots.last_played.remove(&phase);
        Ok(())
    }

    /// File name of the clip assigned to `phase`.
    pub fn file_name(&self, phase: Phase) -> Option<String> {
        self.slots
            .lock()
            .clips
            .get(&phase)
            .map(|clip| clip.name().to_string())
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Drain playback errors collected since the last call.
    pub fn take_errors(&self) -> Vec<SoundError> {
        self.errors.drain()
    }

    fn play(&self, phase: Phase) {
        if !self.is_enabled() {
            return;
        }

        let mut slots = self.slots.lock();
        let Some(clip) = slots.clips.get(&phase) else {
            return;
        };

        let now = Instant::now();
        if let Some(last) = slots.last_played.get(&phase) {
            if now.duration_since(*last) < self.min_replay {
                tracing::trace!(%phase, "sound replay suppressed");
                return;
            }
        }

        // Failed attempts count against the replay window too.
        let result = self.backend.play(clip, &self.errors);
        slots.last_played.insert(phase, now);
        if let Err(e) = result {
            tracing::warn!(%phase, error = %e, "failed to play sound");
            self.errors.push(e);
        }
    }
}

impl CueSink for SoundBoard {
    fn notify(&self, cue: &Cue) {
        tracing::info!(target: "sound_cue", action = cue.action(), "{cue}");
        if let Some(phase) = cue.phase() {
            self.play(phase);
        }
    }
}
