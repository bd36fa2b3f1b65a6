//! Base trait for UI state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the view needs to render the screen)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the freshly-navigated-to shape of the screen; dispatch
/// takes the old state by value and swaps the reduced one back in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
