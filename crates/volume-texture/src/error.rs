//! Error types for image loading.

use thiserror::Error;

use volume_grid::{GridError, GridValueType};

/// Errors that can occur while resolving metadata or materializing pixels.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// No volume grid is bound to this loader.
    #[error("no volume grid is bound to this loader")]
    AbsentSource,

    /// The grid has no active voxels.
    #[error("volume grid has no active voxels")]
    EmptyRegion,

    /// The grid stores a value type that cannot be mapped to texture channels.
    #[error("unsupported grid value type: {0}")]
    UnsupportedValueType(GridValueType),

    /// The caller-provided pixel buffer is smaller than the reported size.
    #[error("pixel buffer too small: need {needed} bytes, got {provided}")]
    BufferTooSmall { needed: usize, provided: usize },

    /// The caller-provided pixel buffer is not aligned for f32 storage.
    #[error("pixel buffer is not aligned for float storage")]
    BufferUnaligned,

    /// An error reported by the grid collaborator.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl LoaderError {
    /// Create a BufferTooSmall error.
    pub fn buffer_too_small(needed: usize, provided: usize) -> Self {
        Self::BufferTooSmall { needed, provided }
    }
}

/// Result type for image loader operations.
pub type LoaderResult<T> = std::result::Result<T, LoaderError>;
