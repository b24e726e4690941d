//! Marker trait for intents.

/// Something that happened: a key press, a submitted form, a fetch result.
///
/// Intents carry data only; reducers decide what they mean.
pub trait Intent: Send + 'static {}
