//! Error types for tda-peel.

use thiserror::Error;

/// Errors that can occur while peeling convex hulls.
#[derive(Debug, Error)]
pub enum PeelError {
    #[error("core error: {0}")]
    Core(#[from] tda_core::Error),

    /// `depths` passed to `stats` were not strictly decreasing.
    #[error("ordering violation: {0}")]
    OrderingViolation(String),
}

/// Result type for convex-peel operations.
pub type PeelResult<T> = Result<T, PeelError>;
