//! The opaque volume grid interface.

use nalgebra::Matrix4;

use crate::error::GridResult;
use crate::types::{BoundingRegion, GridValueType};

/// Read-only access to an externally-owned sparse volume grid.
///
/// This trait is the seam between the texture loader and whatever grid
/// library actually stores the voxels. The loader never sees the grid's
/// tree structure; it only queries the value type, the active-voxel
/// bounding box, the embedded affine map, and asks for dense copies of
/// rectangular regions.
///
/// Implementations must be cheap to query repeatedly: `active_bounds` and
/// `index_to_world` are re-read on every metadata resolve.
pub trait VolumeGrid: Send + Sync {
    /// The stored value type.
    fn value_type(&self) -> GridValueType;

    /// The minimal axis-aligned box enclosing all active voxels.
    ///
    /// Returns [`BoundingRegion::empty`] when the grid has no active
    /// voxels.
    fn active_bounds(&self) -> BoundingRegion;

    /// The grid's embedded affine map from voxel index space to world
    /// space.
    ///
    /// Row-vector convention, as grid libraries store it: a point
    /// transforms as `world = index * M`, with the translation in the
    /// bottom row `M[3][0..3]`.
    fn index_to_world(&self) -> Matrix4<f64>;

    /// Copy a rectangular region of the grid into a dense f32 buffer.
    ///
    /// Writes `channels` contiguous values per voxel (1 for `Float`, 3 for
    /// `Vec3f`), iterating x fastest, then y, then z. Inactive voxels
    /// yield the grid's background value. Fails without touching `out` if
    /// `out.len()` differs from `region.voxel_count() * channels` or the
    /// value type has no dense channel layout.
    fn read_dense(&self, region: &BoundingRegion, out: &mut [f32]) -> GridResult<()>;
}
