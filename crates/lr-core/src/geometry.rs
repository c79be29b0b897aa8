//! Grid and window geometry.
//!
//! Components live on an `m × n` rectangular grid and are addressed either
//! by [`Coord`] (row `x`, column `y`) or by a flat row-major index into the
//! per-trial history vector.  Window geometry is validated against grid
//! geometry once, in [`GridDims::check_window`]; everything downstream may
//! assume the fit holds.

use std::fmt;

use crate::error::{ConfigError, ConfigResult};

// ── Coord ─────────────────────────────────────────────────────────────────────

/// Grid position of a single component: row `x`, column `y`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Grid geometry: `m` rows by `n` columns of components.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    pub m: u32,
    pub n: u32,
}

impl GridDims {
    #[inline]
    pub fn new(m: u32, n: u32) -> Self {
        Self { m, n }
    }

    /// Total number of components on the grid.
    #[inline]
    pub fn component_count(self) -> usize {
        self.m as usize * self.n as usize
    }

    /// Row-major flat index of a coordinate.
    #[inline]
    pub fn index(self, coord: Coord) -> usize {
        coord.x as usize * self.n as usize + coord.y as usize
    }

    /// Coordinate of a row-major flat index.
    #[inline]
    pub fn coord(self, index: usize) -> Coord {
        Coord::new((index / self.n as usize) as u32, (index % self.n as usize) as u32)
    }

    /// Reject degenerate grids.
    pub fn check(self) -> ConfigResult<()> {
        if self.m == 0 || self.n == 0 {
            return Err(ConfigError::EmptyGrid { m: self.m, n: self.n });
        }
        Ok(())
    }

    /// Reject window geometries that do not fit this grid.
    pub fn check_window(self, window: WindowDims) -> ConfigResult<()> {
        self.check()?;
        if window.r == 0 || window.s == 0 {
            return Err(ConfigError::EmptyWindow { r: window.r, s: window.s });
        }
        if window.r > self.m || window.s > self.n {
            return Err(ConfigError::WindowExceedsGrid {
                m: self.m,
                n: self.n,
                r: window.r,
                s: window.s,
            });
        }
        Ok(())
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.m, self.n)
    }
}

// ── WindowDims ────────────────────────────────────────────────────────────────

/// Window geometry: `r` rows by `s` columns of components.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowDims {
    pub r: u32,
    pub s: u32,
}

impl WindowDims {
    #[inline]
    pub fn new(r: u32, s: u32) -> Self {
        Self { r, s }
    }

    /// Number of components covered by one window.
    #[inline]
    pub fn area(self) -> usize {
        self.r as usize * self.s as usize
    }
}

impl fmt::Display for WindowDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.r, self.s)
    }
}
