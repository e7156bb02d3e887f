//! Base trait for reducer-owned state.

/// Marker trait for models.
///
/// Models should be:
/// - Cloneable (readers take snapshots)
/// - Comparable (PartialEq for detecting changes)
/// - Constructible empty (Default)
pub trait Model: Clone + PartialEq + Default + Send + 'static {}
