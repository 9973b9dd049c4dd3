//! Sparse volume grid interfaces for texture loading.
//!
//! This crate defines the seam between a renderer's texture pipeline and
//! the external libraries that own volumetric data:
//!
//! - [`VolumeGrid`]: read-only queries against an opaque sparse grid
//!   (value type, active bounds, embedded affine map, dense region copy)
//! - [`PackedEncoder`]: the optional compact-encoding capability, with
//!   [`NullEncoder`] standing in when the collaborator is absent
//! - [`BoundingRegion`] / [`GridValueType`]: the shared vocabulary both
//!   sides speak
//!
//! The actual sparse storage and the packed codec live behind these traits
//! and are out of scope here.

pub mod error;
pub mod grid;
pub mod packed;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{GridError, GridResult};
pub use grid::VolumeGrid;
pub use packed::{NullEncoder, PackedEncoder, PackedPrecision, PackedVolume};
pub use types::{BoundingRegion, GridValueType};
