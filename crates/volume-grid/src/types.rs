//! Core types for volume grid access.

use serde::{Deserialize, Serialize};

/// The value type stored in a volume grid.
///
/// Grids are opaque: this tag is the only type information the loader sees.
/// Texture loading supports `Float` (one channel) and `Vec3f` (three
/// channels); the remaining variants exist in real grid files but carry no
/// dense channel layout and are rejected explicitly rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridValueType {
    /// Scalar f32 samples (density, temperature, fuel).
    Float,
    /// Three-component f32 samples (velocity, color).
    Vec3f,
    /// 32-bit integer samples (identifiers, counts).
    Int32,
    /// Topology-only grid with no stored values.
    Mask,
}

impl GridValueType {
    /// Number of texture channels this value type expands to, or `None`
    /// when the type has no dense channel layout.
    pub fn channels(&self) -> Option<u8> {
        match self {
            Self::Float => Some(1),
            Self::Vec3f => Some(3),
            Self::Int32 | Self::Mask => None,
        }
    }
}

impl std::fmt::Display for GridValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float => write!(f, "float"),
            Self::Vec3f => write!(f, "vec3f"),
            Self::Int32 => write!(f, "int32"),
            Self::Mask => write!(f, "mask"),
        }
    }
}

/// An axis-aligned box over voxel index space with inclusive bounds.
///
/// The empty region is a valid terminal state signaling "no active voxels";
/// it is canonicalized so that `expand_to_include` grows correctly from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub min: [i32; 3],
    pub max: [i32; 3],
}

impl BoundingRegion {
    /// Create a region from inclusive min/max corners.
    pub fn new(min: [i32; 3], max: [i32; 3]) -> Self {
        Self { min, max }
    }

    /// The canonical empty region.
    pub fn empty() -> Self {
        Self {
            min: [i32::MAX; 3],
            max: [i32::MIN; 3],
        }
    }

    /// Check whether the region contains no voxels.
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.max[i] < self.min[i])
    }

    /// Per-axis extent (`max - min + 1`), all zeros when empty.
    pub fn dim(&self) -> [usize; 3] {
        if self.is_empty() {
            return [0; 3];
        }
        let mut d = [0; 3];
        for i in 0..3 {
            d[i] = (self.max[i] as i64 - self.min[i] as i64 + 1) as usize;
        }
        d
    }

    /// Total number of voxels in the region.
    pub fn voxel_count(&self) -> usize {
        let [x, y, z] = self.dim();
        x * y * z
    }

    /// Check if a voxel coordinate lies inside the region.
    pub fn contains(&self, p: [i32; 3]) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// Grow the region to include a voxel coordinate.
    pub fn expand_to_include(&self, p: [i32; 3]) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        for i in 0..3 {
            min[i] = min[i].min(p[i]);
            max[i] = max[i].max(p[i]);
        }
        Self { min, max }
    }

    /// Linear offset of a voxel within the region's dense layout
    /// (x fastest, then y, then z), or `None` if outside.
    pub fn linear_index(&self, p: [i32; 3]) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let [dx, dy, _] = self.dim();
        let x = (p[0] - self.min[0]) as usize;
        let y = (p[1] - self.min[1]) as usize;
        let z = (p[2] - self.min[2]) as usize;
        Some((z * dy + y) * dx + x)
    }
}

impl Default for BoundingRegion {
    fn default() -> Self {
        Self::empty()
    }
}
