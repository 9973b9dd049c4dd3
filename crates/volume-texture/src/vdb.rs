//! Image loader for sparse volume grids.

use std::any::Any;
use std::sync::Arc;

use volume_grid::{
    BoundingRegion, GridValueType, PackedEncoder, PackedPrecision, PackedVolume, VolumeGrid,
};

use crate::error::{LoaderError, LoaderResult};
use crate::image::{ImageDataType, ImageDeviceFeatures, ImageLoader, ImageMetaData};
use crate::transform::Transform3;

/// Channels a grid value type materializes to.
///
/// The metadata resolver and the pixel materializer both go through this
/// one match, so the two passes cannot disagree on the branch taken for a
/// given grid.
fn dense_channels(value_type: GridValueType) -> LoaderResult<u8> {
    match value_type {
        GridValueType::Float => Ok(1),
        GridValueType::Vec3f => Ok(3),
        GridValueType::Int32 | GridValueType::Mask => {
            Err(LoaderError::UnsupportedValueType(value_type))
        }
    }
}

/// Adapts one named sparse volume grid to the [`ImageLoader`] contract.
///
/// The loader holds a shared reference to the externally-owned grid and
/// never mutates it. Metadata resolution decides between a dense buffer
/// and a packed encoding; pixel materialization replays that decision into
/// the caller's buffer. The packed encoding, when built, is cached for the
/// loader's lifetime and freed by `cleanup`.
pub struct VdbImageLoader {
    grid: Option<Arc<dyn VolumeGrid>>,
    grid_name: String,
    encoder: Option<Arc<dyn PackedEncoder>>,
    precision: PackedPrecision,
    /// Active bounds captured by the most recent metadata resolve.
    bounds: Option<BoundingRegion>,
    /// Packed encoding, built at most once per loader lifetime.
    packed: Option<PackedVolume>,
}

impl VdbImageLoader {
    /// Create a loader for a grid under its logical name.
    pub fn new(grid: Arc<dyn VolumeGrid>, grid_name: impl Into<String>) -> Self {
        Self {
            grid: Some(grid),
            grid_name: grid_name.into(),
            encoder: None,
            precision: PackedPrecision::default(),
            bounds: None,
            packed: None,
        }
    }

    /// Create a grid-less loader that only answers `name` and `equals`.
    ///
    /// Used as a placeholder in the image cache; every metadata or pixel
    /// query fails with [`LoaderError::AbsentSource`].
    pub fn named(grid_name: impl Into<String>) -> Self {
        Self {
            grid: None,
            grid_name: grid_name.into(),
            encoder: None,
            precision: PackedPrecision::default(),
            bounds: None,
            packed: None,
        }
    }

    /// Attach a packed-encoding collaborator.
    pub fn with_encoder(mut self, encoder: Arc<dyn PackedEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Select the precision mode for packed encoding.
    pub fn with_precision(mut self, precision: PackedPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// The underlying grid, if still held.
    pub fn grid(&self) -> Option<&Arc<dyn VolumeGrid>> {
        self.grid.as_ref()
    }

    /// Build the packed encoding if requested, possible, and not cached.
    ///
    /// Encoder failure is a soft failure: logged and downgraded to the
    /// dense path, never propagated.
    fn ensure_packed(&mut self, grid: &Arc<dyn VolumeGrid>, features: &ImageDeviceFeatures) {
        if self.packed.is_some() || !features.has_packed_volumes {
            return;
        }
        let Some(encoder) = &self.encoder else {
            return;
        };
        match encoder.encode(grid.as_ref(), self.precision) {
            Ok(packed) => self.packed = Some(packed),
            Err(err) => {
                tracing::warn!(
                    grid = %self.grid_name,
                    error = %err,
                    "packed volume encoding failed, falling back to dense"
                );
            }
        }
    }
}

impl ImageLoader for VdbImageLoader {
    fn load_metadata(
        &mut self,
        features: &ImageDeviceFeatures,
        metadata: &mut ImageMetaData,
    ) -> LoaderResult<()> {
        let grid = self.grid.as_ref().ok_or(LoaderError::AbsentSource)?.clone();

        let value_type = grid.value_type();
        let channels = dense_channels(value_type)?;

        let bounds = grid.active_bounds();
        if bounds.is_empty() {
            return Err(LoaderError::EmptyRegion);
        }
        let [dim_x, dim_y, dim_z] = bounds.dim();

        self.ensure_packed(&grid, features);

        let (data_type, byte_size) = match &self.packed {
            Some(packed) => {
                let data_type = if packed.channels() == 1 {
                    match packed.precision() {
                        PackedPrecision::Auto => ImageDataType::PackedFloatAdaptive,
                        PackedPrecision::Half => ImageDataType::PackedFloatHalf,
                        PackedPrecision::Full => ImageDataType::PackedFloat,
                    }
                } else {
                    ImageDataType::PackedFloat3
                };
                (data_type, packed.size())
            }
            None => {
                let data_type = if channels == 1 {
                    ImageDataType::Float
                } else {
                    ImageDataType::Float4
                };
                let byte_size =
                    bounds.voxel_count() * channels as usize * std::mem::size_of::<f32>();
                (data_type, byte_size)
            }
        };

        let index_to_object = Transform3::from_index_to_world(&grid.index_to_world());
        let texture_to_index = if self.packed.is_some() {
            // Packed buffers are self-indexing; the device sampler applies
            // the voxel-center offset itself.
            Transform3::identity()
        } else {
            // Shift by half a voxel to sample at voxel centers.
            let [min_x, min_y, min_z] = bounds.min;
            Transform3::translate(-0.5, -0.5, -0.5)
                * Transform3::scale(
                    1.0 / dim_x as f32,
                    1.0 / dim_y as f32,
                    1.0 / dim_z as f32,
                )
                * Transform3::translate(min_x as f32, min_y as f32, min_z as f32)
        };

        tracing::debug!(
            grid = %self.grid_name,
            data_type = ?data_type,
            byte_size,
            "resolved volume image metadata"
        );

        self.bounds = Some(bounds);

        metadata.width = dim_x;
        metadata.height = dim_y;
        metadata.depth = dim_z;
        metadata.channels = channels;
        metadata.data_type = data_type;
        metadata.byte_size = byte_size;
        metadata.transform = index_to_object * texture_to_index;
        metadata.use_transform = true;

        Ok(())
    }

    fn load_pixels(
        &mut self,
        _metadata: &ImageMetaData,
        pixels: &mut [u8],
        _associate_alpha: bool,
    ) -> LoaderResult<()> {
        let grid = self.grid.as_ref().ok_or(LoaderError::AbsentSource)?;

        if let Some(packed) = &self.packed {
            let needed = packed.size();
            if pixels.len() < needed {
                return Err(LoaderError::buffer_too_small(needed, pixels.len()));
            }
            pixels[..needed].copy_from_slice(packed.data());
            return Ok(());
        }

        let bounds = match self.bounds {
            Some(bounds) => bounds,
            None => grid.active_bounds(),
        };
        if bounds.is_empty() {
            return Err(LoaderError::EmptyRegion);
        }

        // Same dispatch as the metadata pass.
        let channels = dense_channels(grid.value_type())? as usize;
        let needed = bounds.voxel_count() * channels * std::mem::size_of::<f32>();
        if pixels.len() < needed {
            return Err(LoaderError::buffer_too_small(needed, pixels.len()));
        }

        let out: &mut [f32] = bytemuck::try_cast_slice_mut(&mut pixels[..needed])
            .map_err(|_| LoaderError::BufferUnaligned)?;
        grid.read_dense(&bounds, out)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.grid_name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &dyn ImageLoader) -> bool {
        // Loaders are unique per grid name within a scene; value-level
        // grid comparison is never performed.
        other
            .as_any()
            .downcast_ref::<VdbImageLoader>()
            .map_or(false, |other| other.grid_name == self.grid_name)
    }

    fn cleanup(&mut self) {
        self.grid = None;
        self.packed = None;
        self.bounds = None;
    }

    fn is_vdb_loader(&self) -> bool {
        true
    }
}
