//! Radial falloff brushes that sculpt a voxel grid in place.
#![forbid(unsafe_code)]

pub mod presets;

pub use presets::{BrushSet, BrushVariant};

use sculpt_field::VoxelGrid;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrushError {
    InvalidRadius(i32),
    UnknownVariant(String),
}

impl fmt::Display for BrushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrushError::InvalidRadius(r) => write!(f, "brush radius must be positive, got {}", r),
            BrushError::UnknownVariant(name) => write!(f, "unknown brush variant: {}", name),
        }
    }
}

impl std::error::Error for BrushError {}

/// How a brush combines its strength with the value already in a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendPolicy {
    /// Replace the value.
    #[default]
    Overwrite,
    /// Add to the value, clamped into `[0, 1]`.
    Additive,
}

impl BlendPolicy {
    #[inline]
    pub fn blend(self, old: f64, amount: f64) -> f64 {
        match self {
            BlendPolicy::Overwrite => amount,
            BlendPolicy::Additive => (old + amount).clamp(0.0, 1.0),
        }
    }
}

/// Counters for one brush application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrokeStats {
    /// Cells whose value was written.
    pub touched: usize,
    /// Cells inside the radius whose falloff strength reached zero.
    pub faded: usize,
}

/// Integer distance between two cells, `floor(sqrt(dx² + dy²))`.
#[inline]
pub fn cell_distance(x0: i32, y0: i32, x1: i32, y1: i32) -> i32 {
    let dx = f64::from(x1) - f64::from(x0);
    let dy = f64::from(y1) - f64::from(y0);
    (dx * dx + dy * dy).sqrt() as i32
}

/// Circular brush with a full-strength core and a linear falloff ring.
///
/// Cells within `inner_radius` of the centre receive `strength`; beyond it
/// the strength drops by `falloff_percent` per cell until it reaches zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
    size: i32,
    strength: f64,
    start_falloff: f64,
    falloff_percent: f64,
    inner_radius: i32,
    policy: BlendPolicy,
}

impl Brush {
    pub fn new(
        size: i32,
        strength: f64,
        start_falloff: f64,
        falloff_percent: f64,
        policy: BlendPolicy,
    ) -> Result<Self, BrushError> {
        if size <= 0 {
            return Err(BrushError::InvalidRadius(size));
        }
        let mut brush = Self {
            size,
            strength: strength.clamp(0.0, 1.0),
            start_falloff: 0.0,
            falloff_percent: falloff_percent.max(0.0),
            inner_radius: 0,
            policy,
        };
        brush.set_start_falloff(start_falloff);
        Ok(brush)
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn strength(&self) -> f64 {
        self.strength
    }

    #[inline]
    pub fn start_falloff(&self) -> f64 {
        self.start_falloff
    }

    #[inline]
    pub fn falloff_percent(&self) -> f64 {
        self.falloff_percent
    }

    /// Radius of the full-strength core; never exceeds `size`.
    #[inline]
    pub fn inner_radius(&self) -> i32 {
        self.inner_radius
    }

    #[inline]
    pub fn policy(&self) -> BlendPolicy {
        self.policy
    }

    /// Radius, raised to 1 if smaller.
    pub fn set_size(&mut self, size: i32) {
        self.size = size.max(1);
        self.set_start_falloff(self.start_falloff);
    }

    pub fn set_start_falloff(&mut self, start_falloff: f64) {
        self.start_falloff = start_falloff.clamp(0.0, 1.0);
        self.inner_radius = (f64::from(self.size) * self.start_falloff).floor() as i32;
    }

    pub fn set_strength(&mut self, strength: f64) {
        self.strength = strength.clamp(0.0, 1.0);
    }

    /// Per-cell drop beyond the core. Negative values are raised to 0.
    pub fn set_falloff_percent(&mut self, falloff_percent: f64) {
        self.falloff_percent = falloff_percent.max(0.0);
    }

    /// Strength at `distance` cells from the centre, before blending.
    /// `None` once the falloff has reached zero.
    #[inline]
    pub fn strength_at(&self, distance: i32) -> Option<f64> {
        if distance <= self.inner_radius {
            return Some(self.strength);
        }
        let blocks_out = f64::from(distance - self.inner_radius);
        let current = self.strength - blocks_out * self.falloff_percent;
        (current > 0.0).then_some(current)
    }

    /// Apply the brush centred on cell `(cx, cy)`. Any centre is accepted;
    /// the bounding square is clipped to the grid, so a centre off the grid
    /// only edits the overlap.
    pub fn apply(&self, grid: &mut VoxelGrid, cx: i32, cy: i32) -> StrokeStats {
        let mut stats = StrokeStats::default();
        let x0 = cx.saturating_sub(self.size).max(0);
        let x1 = cx.saturating_add(self.size).min(grid.width() - 1);
        let y0 = cy.saturating_sub(self.size).max(0);
        let y1 = cy.saturating_add(self.size).min(grid.height() - 1);
        for x in x0..=x1 {
            for y in y0..=y1 {
                let distance = cell_distance(x, y, cx, cy);
                if distance > self.size {
                    continue;
                }
                let Some(voxel) = grid.get_mut(x, y) else {
                    continue;
                };
                let Some(amount) = self.strength_at(distance) else {
                    stats.faded += 1;
                    continue;
                };
                let value = self.policy.blend(voxel.value, amount);
                voxel.value = value;
                voxel.solid = value > 0.0;
                stats.touched += 1;
            }
        }
        log::trace!(
            target: "brush",
            "stroke at ({}, {}) policy={:?} size={} touched={} faded={}",
            cx,
            cy,
            self.policy,
            self.size,
            stats.touched,
            stats.faded
        );
        stats
    }
}
