//! Sculpt a 2D voxel grid with radial brushes and trace its outline with
//! marching squares.
#![forbid(unsafe_code)]

pub mod config;
pub mod export;
pub mod session;
pub mod stroke;

pub use config::SessionConfig;
pub use export::write_segments;
pub use session::{EditSession, ValueMode};
pub use stroke::{Stroke, StrokeParseError};

pub use sculpt_brush::{BlendPolicy, Brush, BrushSet, BrushVariant, StrokeStats};
pub use sculpt_field::{AggregateOptions, AggregationWindow, Voxel, VoxelGrid};
pub use sculpt_geom::{GridMapping, Segment, Vec2};
pub use sculpt_march::{ContourAlgorithm, ContourSettings, InterpolationMethod};
