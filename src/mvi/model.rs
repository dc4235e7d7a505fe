//! Base trait for models in MVI architecture.

/// Marker trait for model objects.
///
/// Models should be:
/// - Immutable (Clone to create new models)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait Model: Clone + PartialEq + Default + Send + 'static {}
