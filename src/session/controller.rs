//! Breathing session controller.
//!
//! Serializes every intent (user input and countdown driver alike) behind
//! one lock, performs the reducer's cue effects, and publishes whole-model
//! snapshots to subscribers. The countdown driver is a tokio task that lives
//! exactly as long as the session is running.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::breath::{CueSink, DurationField, PhaseDurations};
use crate::mvi::Reducer;
use crate::session::intent::SessionIntent;
use crate::session::reducer::SessionReducer;
use crate::session::state::BreathingModel;

/// Real-time length of one countdown step.
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Handle to a breathing session. Cheap to clone; all clones share state.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    core: Mutex<Core>,
    cues: Arc<dyn CueSink>,
    updates: watch::Sender<BreathingModel>,
    tick: Duration,
    runtime: Handle,
}

struct Core {
    model: BreathingModel,
    /// Bumped on every start/stop of the countdown. Driver intents carrying
    /// an older epoch are dropped.
    epoch: u64,
    driver: Option<JoinHandle<()>>,
}

impl SessionController {
    pub fn new(model: BreathingModel, cues: Arc<dyn CueSink>, runtime: Handle) -> Self {
        Self::with_tick(model, cues, runtime, DEFAULT_TICK)
    }

    /// Like [`SessionController::new`] with a custom countdown step.
    pub fn with_tick(
        model: BreathingModel,
        cues: Arc<dyn CueSink>,
        runtime: Handle,
        tick: Duration,
    ) -> Self {
        let (updates, _) = watch::channel(model.clone());
        Self {
            inner: Arc::new(ControllerInner {
                core: Mutex::new(Core {
                    model,
                    epoch: 0,
                    driver: None,
                }),
                cues,
                updates,
                tick,
                runtime,
            }),
        }
    }

    /// Current model.
    pub fn snapshot(&self) -> BreathingModel {
        self.inner.core.lock().model.clone()
    }

    /// Receiver that observes every model published after an intent.
    pub fn subscribe(&self) -> watch::Receiver<BreathingModel> {
        self.inner.updates.subscribe()
    }

    /// Apply one intent and return the resulting model.
    pub fn dispatch(&self, intent: SessionIntent) -> BreathingModel {
        self.inner.apply(intent, None).unwrap_or_else(|| self.snapshot())
    }

    pub fn start(&self) -> BreathingModel {
        self.dispatch(SessionIntent::Start)
    }

    pub fn pause(&self) -> BreathingModel {
        self.dispatch(SessionIntent::Pause)
    }

    pub fn start_pause(&self) -> BreathingModel {
        self.dispatch(SessionIntent::StartPause)
    }

    pub fn reset(&self) -> BreathingModel {
        self.dispatch(SessionIntent::Reset)
    }

    pub fn set_duration(&self, field: DurationField, value: i64) -> BreathingModel {
        self.dispatch(SessionIntent::SetDuration { field, value })
    }

    pub fn select_preset(&self, durations: PhaseDurations, preset: Option<String>) -> BreathingModel {
        self.dispatch(SessionIntent::SelectPreset { durations, preset })
    }
}

impl ControllerInner {
    /// Reduce, emit cues, manage the driver and publish, all under the lock.
    ///
    /// Returns `None` when `epoch` is given and no longer current.
    fn apply(self: &Arc<Self>, intent: SessionIntent, epoch: Option<u64>) -> Option<BreathingModel> {
        let mut core = self.core.lock();
        if epoch.is_some_and(|epoch| epoch != core.epoch) {
            return None;
        }

        let was_running = core.model.session.running;
        match &intent {
            SessionIntent::Tick | SessionIntent::Advance => tracing::trace!(?intent, "countdown step"),
            _ => tracing::debug!(?intent, "session intent"),
        }

        let mut cues = Vec::new();
        core.model = SessionReducer::reduce(std::mem::take(&mut core.model), intent, &mut cues);
        for cue in &cues {
            self.cues.notify(cue);
        }

        let session = core.model.session;
        if session.running && !was_running {
            core.epoch += 1;
            let driver = self.runtime.spawn(run_countdown(Arc::downgrade(self), core.epoch));
            if let Some(stale) = core.driver.replace(driver) {
                stale.abort();
            }
        } else if !session.running && was_running {
            core.epoch += 1;
            if let Some(driver) = core.driver.take() {
                driver.abort();
            }
        }

        if was_running != session.running || cues.iter().any(|cue| cue.phase().is_some()) {
            tracing::debug!(
                phase = %session.phase,
                remaining = session.remaining,
                running = session.running,
                cycles = session.cycle_count,
                "session state"
            );
        }

        let snapshot = core.model.clone();
        self.updates.send_replace(snapshot.clone());
        Some(snapshot)
    }
}

impl Drop for ControllerInner {
    fn drop(&mut self) {
        if let Some(driver) = self.core.get_mut().driver.take() {
            driver.abort();
        }
    }
}

/// Countdown driver for one running stretch of the session.
///
/// Counting waits one tick and decrements; transitioning resolves the next
/// phase immediately, then yields so zero-length phases advance once per
/// scheduler turn instead of looping in place.
async fn run_countdown(inner: Weak<ControllerInner>, epoch: u64) {
    loop {
        let Some(strong) = inner.upgrade() else {
            return;
        };
        let (session, current) = {
            let core = strong.core.lock();
            (core.model.session, core.epoch)
        };
        let tick = strong.tick;
        drop(strong);
        if current != epoch || !session.running {
            return;
        }

        let transitioning = session.remaining == 0;
        let intent = if transitioning {
            SessionIntent::Advance
        } else {
            tokio::time::sleep(tick).await;
            SessionIntent::Tick
        };

        let Some(strong) = inner.upgrade() else {
            return;
        };
        if strong.apply(intent, Some(epoch)).is_none() {
            return;
        }
        drop(strong);

        if transitioning {
            tokio::task::yield_now().await;
        }
    }
}
