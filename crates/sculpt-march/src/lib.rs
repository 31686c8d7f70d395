//! Contour extraction over a voxel grid: marching squares plus a blocky
//! per-cell outline.
#![forbid(unsafe_code)]

pub mod placement;
pub mod tables;

pub use placement::{InterpolationMethod, VALUE_EPSILON, edge_point};
pub use tables::{CORNER_COMBINATIONS, EDGE_PAIRS, NO_EDGE, segment_count};

use sculpt_field::{Voxel, VoxelGrid};
use sculpt_geom::{GridMapping, Segment, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContourAlgorithm {
    #[default]
    MarchingSquares,
    /// Unit-square edges between solid cells and air.
    Blocky,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContourSettings {
    pub algorithm: ContourAlgorithm,
    pub threshold: f64,
    /// When off, endpoints sit at edge midpoints.
    pub interpolate: bool,
    pub method: InterpolationMethod,
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            algorithm: ContourAlgorithm::MarchingSquares,
            threshold: 0.0,
            interpolate: false,
            method: InterpolationMethod::Threshold,
        }
    }
}

/// The four corners of the cell at `(x, y)` in table order.
#[inline]
pub fn cell_corners(grid: &VoxelGrid, x: i32, y: i32) -> [Voxel; 4] {
    [
        grid.get(x, y),
        grid.get(x + 1, y),
        grid.get(x + 1, y + 1),
        grid.get(x, y + 1),
    ]
}

/// 4-bit code with bit `i` set when corner `i` is above `threshold`.
#[inline]
pub fn configuration_index(corners: &[Voxel; 4], threshold: f64) -> u8 {
    corners
        .iter()
        .enumerate()
        .fold(0u8, |acc, (i, c)| acc | (u8::from(c.value > threshold) << i))
}

/// Push the segments of one cell. Returns how many were added.
pub fn march_cell(
    corners: &[Voxel; 4],
    mapping: &GridMapping,
    threshold: f64,
    method: Option<InterpolationMethod>,
    out: &mut Vec<Segment>,
) -> usize {
    let configuration = configuration_index(corners, threshold);
    if configuration == 0 || configuration == 15 {
        return 0;
    }
    let mut added = 0;
    for pair in CORNER_COMBINATIONS[usize::from(configuration)].chunks_exact(2) {
        if pair[0] == NO_EDGE {
            break;
        }
        let a = edge_endpoint(corners, pair[0], mapping, threshold, method);
        let b = edge_endpoint(corners, pair[1], mapping, threshold, method);
        out.push(Segment::new(a, b));
        added += 1;
    }
    added
}

#[inline]
fn edge_endpoint(
    corners: &[Voxel; 4],
    edge: i8,
    mapping: &GridMapping,
    threshold: f64,
    method: Option<InterpolationMethod>,
) -> Vec2 {
    let [i0, i1] = EDGE_PAIRS[edge as usize];
    edge_point(&corners[i0], &corners[i1], mapping, threshold, method)
}

/// Marching squares over every cell of the grid plus the ring of cells just
/// outside it. Corners past the edge read as air, so shapes touching any
/// border still close.
pub fn march_squares(
    grid: &VoxelGrid,
    mapping: &GridMapping,
    threshold: f64,
    method: Option<InterpolationMethod>,
) -> Vec<Segment> {
    let mut out = Vec::new();
    for x in -1..grid.width() {
        for y in -1..grid.height() {
            let corners = cell_corners(grid, x, y);
            march_cell(&corners, mapping, threshold, method, &mut out);
        }
    }
    out
}

/// Outline of solid cells: one unit edge per side that faces air.
pub fn blocky_outline(grid: &VoxelGrid, mapping: &GridMapping) -> Vec<Segment> {
    let mut out = Vec::new();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if !grid.get(x, y).solid {
                continue;
            }
            let current = mapping.to_world(x, y);
            let right = mapping.to_world(x + 1, y);
            let bottom = mapping.to_world(x, y + 1);
            let bottom_right = mapping.to_world(x + 1, y + 1);

            if !grid.get(x - 1, y).solid {
                out.push(Segment::new(current, bottom));
            }
            if !grid.get(x + 1, y).solid {
                out.push(Segment::new(right, bottom_right));
            }
            if !grid.get(x, y - 1).solid {
                out.push(Segment::new(current, right));
            }
            if !grid.get(x, y + 1).solid {
                out.push(Segment::new(bottom, bottom_right));
            }
        }
    }
    out
}

/// Rebuild the full segment list for `grid`.
pub fn extract_contour(
    grid: &VoxelGrid,
    mapping: &GridMapping,
    settings: &ContourSettings,
) -> Vec<Segment> {
    let segments = match settings.algorithm {
        ContourAlgorithm::MarchingSquares => {
            let method = settings.interpolate.then_some(settings.method);
            march_squares(grid, mapping, settings.threshold, method)
        }
        ContourAlgorithm::Blocky => blocky_outline(grid, mapping),
    };
    log::debug!(
        target: "contour",
        "extracted {} segments algorithm={:?} threshold={} interpolate={}",
        segments.len(),
        settings.algorithm,
        settings.threshold,
        settings.interpolate
    );
    segments
}
