//! Base trait for feature state.

/// Marker trait for feature state objects.
///
/// State should be:
/// - Cloneable (snapshots are handed to subscribers and the view)
/// - Comparable (PartialEq for detecting unchanged state in tests)
/// - Self-contained (everything the view needs to render)
pub trait FeatureState: Clone + PartialEq + Default + Send + 'static {}
