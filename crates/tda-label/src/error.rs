//! Error types for tda-label

use thiserror::Error;

/// Errors that can occur during labelling operations.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Shape mismatch forwarded from `tda-core` (row count does not
    /// divide the mask buffer length).
    #[error("core error: {0}")]
    Core(#[from] tda_core::Error),
}

/// Result type for labelling operations.
pub type LabelResult<T> = Result<T, LabelError>;
