//! Error types for volume grid access.

use thiserror::Error;

use crate::types::GridValueType;

/// Errors that can occur while querying or encoding a volume grid.
#[derive(Error, Debug)]
pub enum GridError {
    /// The grid stores a value type that cannot be mapped to texture channels.
    #[error("unsupported grid value type: {0}")]
    UnsupportedValueType(GridValueType),

    /// A destination buffer does not match the requested region.
    #[error("dense buffer length mismatch: expected {expected} values, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    /// The packed encoder reported an internal error.
    #[error("packed encoding failed: {0}")]
    EncodeFailed(String),

    /// No packed-encoding collaborator is available on this build or device.
    #[error("packed encoding is not available")]
    PackedUnavailable,
}

impl GridError {
    /// Create a BufferMismatch error.
    pub fn buffer_mismatch(expected: usize, actual: usize) -> Self {
        Self::BufferMismatch { expected, actual }
    }

    /// Create an EncodeFailed error.
    pub fn encode_failed(msg: impl Into<String>) -> Self {
        Self::EncodeFailed(msg.into())
    }
}

/// Result type for volume grid operations.
pub type GridResult<T> = std::result::Result<T, GridError>;
