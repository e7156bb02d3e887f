//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent requested mutations, whether they come from an HTTP
/// handler, the CLI, or the checkout flow. Reducers turn them into new models.
pub trait Intent: Send + 'static {}
