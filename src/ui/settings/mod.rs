//! Settings panel.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Panel state and row layout
//! - `intent.rs` - Key-level intents
//! - `reducer.rs` - Pure transitions; session and sound edits come back as
//!   effects for the app to perform

mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::{SettingsEffect, SettingsReducer};
pub use state::{
    step_duration, PathEditor, SettingsPanelState, SettingsRow, MAX_DURATION_SECS,
};
