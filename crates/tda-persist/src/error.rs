//! Error types for tda-persist.

use thiserror::Error;

/// Errors that can occur while building a persistence diagram.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("core error: {0}")]
    Core(#[from] tda_core::Error),

    #[error("labelling error: {0}")]
    Label(#[from] tda_label::LabelError),

    /// Fewer than two threshold steps were requested; a single step
    /// cannot establish a trajectory.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;
