//! Error types for host-side descriptor lookups.
//!
//! Actions themselves are total and never produce these.

use thiserror::Error;

/// Result type for descriptor lookups.
pub type UiResult<T> = Result<T, UiError>;

/// Errors a host can hit while resolving names against a descriptor.
#[derive(Debug, Error)]
pub enum UiError {
    /// No screen is registered under this name.
    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    /// No action is registered under this name.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
