//! Failure taxonomy for catalog calls.

use thiserror::Error;

/// What went wrong with a single catalog call.
///
/// Screens only ever show the rendered string, but the split matters:
/// transport trouble and service answers read differently, and tests can
/// assert on the not-found case without string matching.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a usable response: unreachable host,
    /// connect timeout, or an unreadable body.
    #[error("request failed: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },
}

impl CatalogError {
    /// True when the service said the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Service { status: 404, .. })
    }
}
