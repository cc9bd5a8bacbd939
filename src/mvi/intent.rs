//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is a discrete event that may transition state: a key press,
/// a pasted string, or a payload delivered by a background channel.
/// Intents are consumed by reducers; they carry data, never behavior.
pub trait Intent: Send + 'static {}
