//! Test data generators for creating synthetic volume grids.
//!
//! These generators create predictable, verifiable voxel patterns that can
//! be used across the test suite.

use volume_grid::{BoundingRegion, GridValueType};

use crate::fixtures::MemoryGrid;

/// Creates a scalar grid with predictable values.
///
/// Each voxel value is calculated as: `x * 100 + y * 10 + z` (absolute
/// voxel coordinates). This makes it easy to verify that data lands at the
/// right offset after a dense copy.
pub fn create_scalar_grid(bounds: BoundingRegion) -> MemoryGrid {
    let mut grid = MemoryGrid::new(GridValueType::Float, bounds);
    for z in bounds.min[2]..=bounds.max[2] {
        for y in bounds.min[1]..=bounds.max[1] {
            for x in bounds.min[0]..=bounds.max[0] {
                grid.set_scalar([x, y, z], (x * 100 + y * 10 + z) as f32);
            }
        }
    }
    grid
}

/// Creates a vector grid where each voxel stores its own coordinates.
///
/// Voxel `(x, y, z)` holds the components `[x, y, z]` as f32, so any
/// reordering or channel swap shows up immediately in assertions.
pub fn create_vector_grid(bounds: BoundingRegion) -> MemoryGrid {
    let mut grid = MemoryGrid::new(GridValueType::Vec3f, bounds);
    for z in bounds.min[2]..=bounds.max[2] {
        for y in bounds.min[1]..=bounds.max[1] {
            for x in bounds.min[0]..=bounds.max[0] {
                grid.set_vector([x, y, z], [x as f32, y as f32, z as f32]);
            }
        }
    }
    grid
}

/// Creates a scalar density grid with a radial falloff.
///
/// Density is 1.0 at the origin and falls linearly to 0.0 at `radius`,
/// similar in shape to a smoke or fog volume.
pub fn create_density_sphere(radius: i32) -> MemoryGrid {
    let bounds = BoundingRegion::new([-radius; 3], [radius; 3]);
    let mut grid = MemoryGrid::new(GridValueType::Float, bounds);
    for z in -radius..=radius {
        for y in -radius..=radius {
            for x in -radius..=radius {
                let dist = ((x * x + y * y + z * z) as f32).sqrt();
                let density = (1.0 - dist / radius as f32).max(0.0);
                grid.set_scalar([x, y, z], density);
            }
        }
    }
    grid
}
