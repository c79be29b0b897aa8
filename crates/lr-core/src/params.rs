//! Simulation parameters.
//!
//! One [`SimParams`] value describes one configuration: grid and window
//! geometry, the shared failure/repair rates, the horizon, the trial count,
//! and the master seed.  Validation happens once, up front, via
//! [`SimParams::validate`]; after that the whole pipeline is infallible.

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::{GridDims, WindowDims};

// ── Rates ─────────────────────────────────────────────────────────────────────

/// Exponential failure/repair rates shared by every component.
///
/// `fail` (λ) governs the sojourn in the up state, `repair` (μ) the sojourn
/// in the down state.  Both must be strictly positive.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rates {
    pub fail: f64,
    pub repair: f64,
}

impl Rates {
    #[inline]
    pub fn new(fail: f64, repair: f64) -> Self {
        Self { fail, repair }
    }

    pub fn check(self) -> ConfigResult<()> {
        if !(self.fail > 0.0) {
            return Err(ConfigError::NonPositive { what: "failure rate", value: self.fail });
        }
        if !(self.repair > 0.0) {
            return Err(ConfigError::NonPositive { what: "repair rate", value: self.repair });
        }
        Ok(())
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built by a sweep driver, one value per parameter combination,
/// and handed to `lr-sim`'s `Simulation::new`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Simulation horizon per trial, in model time units.  Must be > 0.
    pub horizon: f64,

    /// Number of independent trials to run.  Must be > 0.
    pub iterations: u32,

    /// Grid geometry (m rows × n columns).
    pub grid: GridDims,

    /// Window geometry (r rows × s columns).  Must fit inside `grid`.
    pub window: WindowDims,

    /// Failure/repair rates applied to every component.
    pub rates: Rates,

    /// Master RNG seed.  The same seed always produces identical records.
    pub seed: u64,
}

impl SimParams {
    /// Reject invalid geometry, rates, horizon, or iteration count.
    ///
    /// NaN horizons and rates fail the positivity checks (`!(x > 0.0)`).
    pub fn validate(&self) -> ConfigResult<()> {
        self.grid.check_window(self.window)?;
        self.rates.check()?;
        if !(self.horizon > 0.0) {
            return Err(ConfigError::NonPositive { what: "horizon", value: self.horizon });
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
