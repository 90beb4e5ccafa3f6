//! Base trait for intents (user/platform actions).

/// Marker trait for intent values.
///
/// An intent is a typed description of one user action or platform event,
/// produced by a mapping function and consumed by a reducer. Intents are
/// immutable once produced and are not persisted.
pub trait Intent: Send + 'static {}
