//! Shared test utilities for the volume-texture workspace.
//!
//! This crate provides common testing infrastructure including:
//! - An in-memory [`VolumeGrid`](volume_grid::VolumeGrid) implementation
//! - Scripted packed encoders (counting, failing)
//! - Voxel data generators with predictable patterns
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
