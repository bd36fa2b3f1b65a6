//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Completed catalog calls (loaded data, failures)
/// - Navigation events
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
