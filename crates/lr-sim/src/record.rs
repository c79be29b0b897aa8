//! Per-trial statistics record.

use std::time::Duration;

/// The statistics produced by one independent trial.
///
/// A pure value assembled at the end of the trial — records never share or
/// reuse state across trials.  `elapsed` is telemetry (wall clock per
/// trial), not part of the statistical result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialRecord {
    /// Trial index, 0-based.
    pub trial: u32,

    // ── Grid-level statistics ─────────────────────────────────────────────
    /// Mean grid up-interval duration (MTTF).
    pub grid_mttf: f64,
    /// Mean grid down-interval duration (MTTR).
    pub grid_mttr: f64,
    /// Total grid uptime over the horizon.
    pub grid_uptime: f64,
    /// Total grid downtime.  `grid_uptime + grid_downtime == horizon`.
    pub grid_downtime: f64,
    /// Number of grid-level failures.
    pub grid_fails: u32,
    /// Number of grid-level repairs.
    pub grid_repairs: u32,

    // ── Across-windows statistics ─────────────────────────────────────────
    /// Earliest first-fail epoch across all windows; `None` if no window
    /// ever failed.
    pub first_fail: Option<f64>,
    /// Earliest first-repair epoch across all windows; `None` if no window
    /// ever repaired.
    pub first_repair: Option<f64>,
    /// Mean window MTTF, averaged across windows.
    pub window_mttf_mean: f64,
    /// Mean window MTTR, averaged across windows.
    pub window_mttr_mean: f64,
    /// Mean number of down-occurrences per window.
    pub window_fail_count_mean: f64,

    // ── Telemetry ─────────────────────────────────────────────────────────
    /// Wall-clock time this trial took.
    pub elapsed: Duration,
}
