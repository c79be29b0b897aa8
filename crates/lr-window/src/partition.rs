//! Window enumeration over grid geometry.

use lr_core::{ConfigResult, Coord, GridDims, WindowDims};

/// One rectangular neighborhood of the grid.
///
/// `members` holds the flat row-major indices of the `r · s` components in
/// the rectangle; the index order inside a window is irrelevant to
/// aggregation (the member set is what matters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Top-left anchor of the rectangle.
    pub anchor: Coord,
    /// Flat component indices covered by this window.
    pub members: Vec<u32>,
}

/// Enumerate every `r × s` window of an `m × n` grid.
///
/// Returns `(m−r+1)·(n−s+1)` windows in row-major anchor order, or a
/// `ConfigError` when the window does not fit the grid (no valid anchor
/// exists) or any dimension is zero.
pub fn partition(grid: GridDims, window: WindowDims) -> ConfigResult<Vec<Window>> {
    grid.check_window(window)?;

    let anchor_rows = grid.m - window.r + 1;
    let anchor_cols = grid.n - window.s + 1;

    let mut windows = Vec::with_capacity(anchor_rows as usize * anchor_cols as usize);
    for ax in 0..anchor_rows {
        for ay in 0..anchor_cols {
            let mut members = Vec::with_capacity(window.area());
            for dx in 0..window.r {
                for dy in 0..window.s {
                    members.push(grid.index(Coord::new(ax + dx, ay + dy)) as u32);
                }
            }
            windows.push(Window { anchor: Coord::new(ax, ay), members });
        }
    }
    Ok(windows)
}
