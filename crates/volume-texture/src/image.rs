//! The texture pipeline's image-source contract.
//!
//! Every image source the renderer can sample (file-backed, procedural,
//! volumetric) implements [`ImageLoader`]. The pipeline resolves metadata
//! once per image, allocates device storage from the reported size, then
//! asks the loader to materialize pixels into it.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::error::LoaderResult;
use crate::transform::Transform3;

/// Storage representation of a loaded image on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageDataType {
    /// Dense single-channel f32 voxels.
    Float,
    /// Dense multi-channel f32 voxels, sampled 4-wide.
    Float4,
    /// Packed single-channel volume, full 32-bit precision.
    PackedFloat,
    /// Packed single-channel volume, 16-bit precision.
    PackedFloatHalf,
    /// Packed single-channel volume, adaptive per-node precision.
    PackedFloatAdaptive,
    /// Packed three-channel volume.
    PackedFloat3,
}

impl ImageDataType {
    /// Whether this representation is a packed volume encoding.
    pub fn is_packed(&self) -> bool {
        matches!(
            self,
            Self::PackedFloat | Self::PackedFloatHalf | Self::PackedFloatAdaptive | Self::PackedFloat3
        )
    }
}

/// Capabilities of the device the image will be uploaded to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImageDeviceFeatures {
    /// The device can sample packed volume encodings directly; prefer
    /// them over dense buffers when an encoder is available.
    pub has_packed_volumes: bool,
}

/// Image description filled in by a loader's metadata pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMetaData {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    /// Channels per pixel in the materialized buffer.
    pub channels: u8,
    /// Device storage representation.
    pub data_type: ImageDataType,
    /// Exact number of bytes `load_pixels` will write.
    pub byte_size: usize,
    /// Texture space to object space.
    pub transform: Transform3,
    pub use_transform: bool,
}

impl Default for ImageMetaData {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            depth: 0,
            channels: 0,
            data_type: ImageDataType::Float,
            byte_size: 0,
            transform: Transform3::identity(),
            use_transform: false,
        }
    }
}

/// A source of image data for the texture pipeline.
///
/// The pipeline drives loaders through a fixed sequence: `load_metadata`
/// (any number of times), then `load_pixels` into a buffer of at least
/// `byte_size` bytes, then `cleanup` once the image is device-resident.
/// `name` and `equals` stay valid for the loader's whole lifetime and are
/// used as the image cache's dedup key.
pub trait ImageLoader: Send {
    /// Inspect the source and fill `metadata`.
    ///
    /// On failure `metadata` is left unmodified.
    fn load_metadata(
        &mut self,
        features: &ImageDeviceFeatures,
        metadata: &mut ImageMetaData,
    ) -> LoaderResult<()>;

    /// Materialize pixel data into `pixels`.
    ///
    /// `pixels` must hold at least `metadata.byte_size` bytes. File-backed
    /// loaders honor `associate_alpha`; sources without alpha ignore it.
    /// On failure the buffer contents are unchanged.
    fn load_pixels(
        &mut self,
        metadata: &ImageMetaData,
        pixels: &mut [u8],
        associate_alpha: bool,
    ) -> LoaderResult<()>;

    /// Stable name of the image source.
    fn name(&self) -> &str;

    /// Self as `Any`, for `equals` downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Whether two loaders refer to the same image source.
    fn equals(&self, other: &dyn ImageLoader) -> bool;

    /// Release the source data; idempotent. The loader remains valid for
    /// `name` and `equals` afterwards.
    fn cleanup(&mut self);

    /// Capability tag for volumetric sources, letting callers special-case
    /// them without a full type check.
    fn is_vdb_loader(&self) -> bool {
        false
    }
}
