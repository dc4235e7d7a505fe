//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, settings edits)
/// - System events (countdown ticks, phase completion)
///
/// Intents are processed by reducers to produce new models.
pub trait Intent: Send + 'static {}
