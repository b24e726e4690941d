//! Marker trait for UI state.

/// State objects are self-contained snapshots: everything the view needs to
/// draw, cloneable and comparable so transitions are easy to assert on.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
