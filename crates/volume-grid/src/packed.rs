//! Packed (device-friendly) volume encoding capability.
//!
//! Some render devices sample a compact hierarchical encoding directly
//! instead of a dense voxel buffer. The encoder that produces it is an
//! external collaborator; this module defines the capability interface and
//! a null provider for builds and devices without it.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::grid::VolumeGrid;

/// Numeric precision mode for packed volume encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PackedPrecision {
    /// Adaptive per-node precision, smallest output.
    #[default]
    Auto,
    /// 16-bit quantized values.
    Half,
    /// Full 32-bit float values.
    Full,
}

impl PackedPrecision {
    /// Parse from the legacy numeric encoding (`0` = auto, `16` = half,
    /// anything else = full).
    pub fn from_legacy(value: u32) -> Self {
        match value {
            0 => Self::Auto,
            16 => Self::Half,
            _ => Self::Full,
        }
    }

    /// The legacy numeric encoding of this mode.
    pub fn as_legacy(&self) -> u32 {
        match self {
            Self::Auto => 0,
            Self::Half => 16,
            Self::Full => 32,
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "half" | "16" => Self::Half,
            "full" | "32" => Self::Full,
            _ => Self::Auto,
        }
    }
}

impl std::fmt::Display for PackedPrecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Half => write!(f, "half"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// An owned packed-encoding of a volume grid.
///
/// The byte layout is opaque to the loader; it is copied verbatim into the
/// device pixel buffer and interpreted by the sampling code on the device.
#[derive(Debug, Clone)]
pub struct PackedVolume {
    bytes: Vec<u8>,
    precision: PackedPrecision,
    channels: u8,
}

impl PackedVolume {
    /// Wrap an encoder's output buffer.
    pub fn new(bytes: Vec<u8>, precision: PackedPrecision, channels: u8) -> Self {
        Self {
            bytes,
            precision,
            channels,
        }
    }

    /// Total size of the encoding in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// The raw encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    /// The precision mode the encoder used.
    pub fn precision(&self) -> PackedPrecision {
        self.precision
    }

    /// Channels per voxel in the encoded data.
    pub fn channels(&self) -> u8 {
        self.channels
    }
}

/// Converts a volume grid into its packed device representation.
///
/// Encoders only support scalar and three-vector grids; anything else
/// fails with [`GridError::UnsupportedValueType`]. Internal encoder
/// failures surface as [`GridError::EncodeFailed`] values, never panics.
pub trait PackedEncoder: Send + Sync {
    /// Encode `grid` at the requested precision.
    fn encode(&self, grid: &dyn VolumeGrid, precision: PackedPrecision) -> GridResult<PackedVolume>;
}

/// Capability stand-in for builds without a packed-encoding collaborator.
///
/// Always fails with [`GridError::PackedUnavailable`], so callers exercise
/// the same fallback path as a device that lacks packed-volume support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEncoder;

impl PackedEncoder for NullEncoder {
    fn encode(
        &self,
        _grid: &dyn VolumeGrid,
        _precision: PackedPrecision,
    ) -> GridResult<PackedVolume> {
        Err(GridError::PackedUnavailable)
    }
}
