//! The fetch lifecycle every remote-backed screen renders from.

/// Lifecycle of a screen's entry fetch.
///
/// Exactly one of "loading", "data", and "failed" holds at any time; the
/// enum makes the other combinations unrepresentable instead of policing
/// boolean flags. `Failed` is terminal for the screen instance: the only
/// way to fetch again is to navigate, which builds a fresh screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    /// Entry fetch still in flight.
    Loading,
    /// Fetch succeeded; `T` is whatever the screen renders from.
    Ready(T),
    /// Entry fetch failed; `message` is ready for display.
    Failed { message: String },
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Remote::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Remote::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
