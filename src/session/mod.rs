//! Breathing session controller.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Session state and the rendered model
//! - `intent.rs` - User intents and countdown events
//! - `reducer.rs` - Transitions (pure, cues returned as effects)
//! - `controller.rs` - Serialized dispatch, countdown driver, subscriptions

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{SessionController, DEFAULT_TICK};
pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{BreathingModel, SessionState};
