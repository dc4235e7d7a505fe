//! Model-View-Intent (MVI) architecture primitives.
//!
//! Both the breathing session and the settings panel use unidirectional
//! data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ Model ──→ View
//!    ↑          │                   │
//!    │          └──→ Effects        │
//!    └──────────────────────────────┘
//! ```
//!
//! - **Model**: Immutable snapshot of everything a view renders
//! - **Intent**: User actions or system events (key presses, timer ticks)
//! - **Reducer**: Pure function that transforms the model and reports
//!   effects as data for the caller to perform

mod intent;
mod model;
mod reducer;

pub use intent::Intent;
pub use model::Model;
pub use reducer::Reducer;
