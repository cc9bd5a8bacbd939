//! Base trait for reducer-owned state.

/// Marker trait for state objects.
///
/// States are:
/// - replaced wholesale on every transition (Clone, never mutated in place)
/// - self-contained (everything the view reads comes from here)
/// - comparable (PartialEq, so tests and views can detect change)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
