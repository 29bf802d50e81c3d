//! Error types shared across the tda workspace.
//!
//! Every component in this workspace recognises the same two failure
//! shapes: a shape mismatch between buffers whose lengths must agree,
//! and an ordering violation in a sequence that is required to be
//! monotonic. Both are programming errors — there is no retry or
//! partial-recovery path.

use thiserror::Error;

/// Error type shared by the core geometry/sort utilities.
#[derive(Error, Debug)]
pub enum Error {
    /// A row count does not evenly divide a buffer length, or two
    /// parallel arrays that must have equal length do not.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A sequence required to be monotonic (strictly increasing or
    /// strictly decreasing, depending on context) was not.
    #[error("ordering violation: {0}")]
    OrderingViolation(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
