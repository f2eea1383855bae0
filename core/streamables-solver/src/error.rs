//! Error types for the solver.

use thiserror::Error;

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors that can occur while setting up a solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// No secret configured. The message matches what clients of the solve
    /// endpoint already expect.
    #[error("METHOD_NOT_FOUND")]
    MissingSecret,
}
