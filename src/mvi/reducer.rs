//! Reducer trait.

use super::intent::Intent;
use super::model::Model;

/// Reducer transforms a model based on intents.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function: (Model, Intent) -> (Model, Outcome). Anything impure, such
/// as reading the clock, is resolved into the intent before it gets here.
pub trait Reducer {
    /// The model this reducer operates on.
    type Model: Model;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// What the caller learns about the transition.
    type Outcome;

    fn reduce(model: Self::Model, intent: Self::Intent) -> (Self::Model, Self::Outcome);
}
