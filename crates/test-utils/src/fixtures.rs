//! Common test fixtures for volume-texture tests.
//!
//! Provides an in-memory stand-in for the external grid library and
//! scripted packed encoders, so loader behavior can be tested without
//! either collaborator.

use std::sync::atomic::{AtomicUsize, Ordering};

use nalgebra::Matrix4;

use volume_grid::{
    BoundingRegion, GridError, GridResult, GridValueType, PackedEncoder, PackedPrecision,
    PackedVolume, VolumeGrid,
};

/// An in-memory volume grid.
///
/// Every voxel inside the bounding region counts as active; voxels outside
/// read as the background value. Stores `channels` f32 values per voxel in
/// the dense layout (x fastest).
pub struct MemoryGrid {
    value_type: GridValueType,
    bounds: BoundingRegion,
    values: Vec<f32>,
    transform: Matrix4<f64>,
    background: f32,
}

impl MemoryGrid {
    /// Create a zero-filled grid over `bounds` with an identity transform.
    pub fn new(value_type: GridValueType, bounds: BoundingRegion) -> Self {
        let channels = value_type.channels().unwrap_or(0) as usize;
        Self {
            value_type,
            bounds,
            values: vec![0.0; bounds.voxel_count() * channels],
            transform: Matrix4::identity(),
            background: 0.0,
        }
    }

    /// Create a grid with no active voxels.
    pub fn empty(value_type: GridValueType) -> Self {
        Self::new(value_type, BoundingRegion::empty())
    }

    /// Set the index-to-world map (row-vector convention, translation in
    /// the bottom row).
    pub fn with_transform(mut self, transform: Matrix4<f64>) -> Self {
        self.transform = transform;
        self
    }

    /// Set the background value read outside the bounds.
    pub fn with_background(mut self, background: f32) -> Self {
        self.background = background;
        self
    }

    /// Store a scalar sample.
    ///
    /// Panics if the voxel lies outside the grid bounds or the grid is not
    /// scalar.
    pub fn set_scalar(&mut self, p: [i32; 3], value: f32) {
        assert_eq!(self.value_type, GridValueType::Float, "not a scalar grid");
        let idx = self
            .bounds
            .linear_index(p)
            .expect("voxel outside grid bounds");
        self.values[idx] = value;
    }

    /// Store a vector sample.
    ///
    /// Panics if the voxel lies outside the grid bounds or the grid is not
    /// a vector grid.
    pub fn set_vector(&mut self, p: [i32; 3], value: [f32; 3]) {
        assert_eq!(self.value_type, GridValueType::Vec3f, "not a vector grid");
        let idx = self
            .bounds
            .linear_index(p)
            .expect("voxel outside grid bounds");
        self.values[idx * 3..idx * 3 + 3].copy_from_slice(&value);
    }
}

impl VolumeGrid for MemoryGrid {
    fn value_type(&self) -> GridValueType {
        self.value_type
    }

    fn active_bounds(&self) -> BoundingRegion {
        self.bounds
    }

    fn index_to_world(&self) -> Matrix4<f64> {
        self.transform
    }

    fn read_dense(&self, region: &BoundingRegion, out: &mut [f32]) -> GridResult<()> {
        let channels = self
            .value_type
            .channels()
            .ok_or(GridError::UnsupportedValueType(self.value_type))?
            as usize;
        let expected = region.voxel_count() * channels;
        if out.len() != expected {
            return Err(GridError::buffer_mismatch(expected, out.len()));
        }

        let [dx, dy, dz] = region.dim();
        let mut cursor = 0;
        for z in 0..dz {
            for y in 0..dy {
                for x in 0..dx {
                    let p = [
                        region.min[0] + x as i32,
                        region.min[1] + y as i32,
                        region.min[2] + z as i32,
                    ];
                    match self.bounds.linear_index(p) {
                        Some(idx) => {
                            let src = &self.values[idx * channels..(idx + 1) * channels];
                            out[cursor..cursor + channels].copy_from_slice(src);
                        }
                        None => {
                            out[cursor..cursor + channels].fill(self.background);
                        }
                    }
                    cursor += channels;
                }
            }
        }
        Ok(())
    }
}

/// A packed encoder that records call counts and emits the grid's dense
/// values as little-endian f32 bytes.
///
/// No real quantization happens; the output is deterministic so tests can
/// assert verbatim byte copies and cache behavior.
#[derive(Default)]
pub struct StubEncoder {
    calls: AtomicUsize,
}

impl StubEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `encode` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PackedEncoder for StubEncoder {
    fn encode(&self, grid: &dyn VolumeGrid, precision: PackedPrecision) -> GridResult<PackedVolume> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let value_type = grid.value_type();
        let channels = value_type
            .channels()
            .ok_or(GridError::UnsupportedValueType(value_type))?;
        let bounds = grid.active_bounds();

        let mut values = vec![0.0f32; bounds.voxel_count() * channels as usize];
        grid.read_dense(&bounds, &mut values)?;

        let bytes = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Ok(PackedVolume::new(bytes, precision, channels))
    }
}

/// A packed encoder whose internal conversion always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEncoder;

impl PackedEncoder for FailingEncoder {
    fn encode(
        &self,
        _grid: &dyn VolumeGrid,
        _precision: PackedPrecision,
    ) -> GridResult<PackedVolume> {
        Err(GridError::encode_failed("synthetic encoder failure"))
    }
}
