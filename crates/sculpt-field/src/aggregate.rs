//! Rebuilds cell values from neighbouring solidity.
//!
//! Values are computed from one snapshot of the grid's solid flags, so the
//! scan order never leaks into the result. Neighbours past the grid edge are
//! air, which pulls border cells toward air.

use crate::grid::VoxelGrid;

/// Neighbourhood sampled when averaging solidity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AggregationWindow {
    /// Square ring of `radius` around the cell, the cell itself excluded.
    Full { radius: i32 },
    /// The four axis-aligned neighbours.
    Cheap,
}

impl Default for AggregationWindow {
    fn default() -> Self {
        AggregationWindow::Full { radius: 1 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    pub window: AggregationWindow,
    /// Store `-aggregate` for solid cells.
    pub invert: bool,
}

#[inline]
fn solidity(grid: &VoxelGrid, x: i32, y: i32) -> f64 {
    if grid.get(x, y).solid { 1.0 } else { 0.0 }
}

/// Average solidity of the window around `(x, y)`.
pub fn aggregate_at(grid: &VoxelGrid, x: i32, y: i32, window: AggregationWindow) -> f64 {
    match window {
        AggregationWindow::Cheap => {
            let sum = solidity(grid, x - 1, y)
                + solidity(grid, x + 1, y)
                + solidity(grid, x, y - 1)
                + solidity(grid, x, y + 1);
            sum / 4.0
        }
        AggregationWindow::Full { radius } => {
            let r = radius.max(1);
            let mut sum = 0.0;
            let mut count = 0u32;
            for dy in -r..=r {
                for dx in -r..=r {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    sum += solidity(grid, x + dx, y + dy);
                    count += 1;
                }
            }
            sum / f64::from(count)
        }
    }
}

/// Recompute every cell's value. Solidity is left untouched.
///
/// Air cells take the aggregate. Solid cells count as fully solid (1.0), or
/// take `-aggregate` when `invert` is set. The result depends only on the
/// solid flags, so repeated passes with any mix of options are stable.
pub fn recompute_values(grid: &mut VoxelGrid, opts: AggregateOptions) {
    let (w, h) = (grid.width(), grid.height());
    let mut computed = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            computed.push(aggregate_at(grid, x, y, opts.window));
        }
    }

    for (v, aggregate) in grid.iter_mut().zip(computed) {
        v.value = match (v.solid, opts.invert) {
            (false, _) => aggregate,
            (true, false) => 1.0,
            (true, true) => -aggregate,
        };
    }
    log::debug!(
        target: "field",
        "recomputed values {}x{} window={:?} invert={}",
        w,
        h,
        opts.window,
        opts.invert
    );
}
