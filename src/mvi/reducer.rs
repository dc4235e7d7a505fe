//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::model::Model;

/// Reducer transforms a model based on intents.
///
/// The reducer is the only place where transitions happen. It must stay
/// pure: (Model, Intent) -> Model, with side effects described as values
/// pushed onto `effects` in the order they must be performed.
pub trait Reducer {
    /// The model type this reducer operates on.
    type Model: Model;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Effects the caller performs after the transition.
    type Effect;

    /// Process an intent and return the new model.
    fn reduce(
        model: Self::Model,
        intent: Self::Intent,
        effects: &mut Vec<Self::Effect>,
    ) -> Self::Model;
}
