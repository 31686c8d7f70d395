//! Voxel grid storage, noise regeneration and value aggregation.
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod grid;
pub mod noise;

pub use aggregate::{AggregateOptions, AggregationWindow, aggregate_at, recompute_values};
pub use config::{FieldSection, GridSection, NoiseSection};
pub use grid::{GridError, Voxel, VoxelGrid};
pub use noise::{FillMode, NoiseParams, NoiseSource, PerlinNoise, regenerate};
