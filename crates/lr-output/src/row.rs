//! The flat row type written by sweep backends.

use lr_core::SimParams;
use lr_sim::TrialRecord;

/// Sentinel written when no window ever failed during a trial.
pub const NO_FAILURE: &str = "No Failure";
/// Sentinel written when no window ever repaired during a trial.
pub const NO_REPAIR: &str = "No Repair";

/// One output row: configuration columns plus one trial's statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    // ── Configuration columns ─────────────────────────────────────────────
    pub sim_time: f64,
    pub m: u32,
    pub n: u32,
    pub r: u32,
    pub s: u32,
    pub fail_rate: f64,
    pub repair_rate: f64,
    pub iteration: u32,

    // ── Statistics columns ────────────────────────────────────────────────
    /// Grid-level MTTF.
    pub mttf: f64,
    /// Grid-level MTTR.
    pub mttr: f64,
    /// Earliest first-fail epoch across windows.
    pub ff: Option<f64>,
    /// Earliest first-repair epoch across windows.
    pub fr: Option<f64>,
    /// Mean window MTTF.
    pub sm_mttf: f64,
    /// Mean window MTTR.
    pub sm_mttr: f64,
    /// Mean down-occurrence count per window.
    pub sm_fails: f64,
    /// Grid-level fail count.
    pub fails: u32,
    /// Grid-level repair count.
    pub repairs: u32,
    /// Wall-clock seconds the trial took (telemetry).
    pub elapsed_secs: f64,
}

impl SweepRow {
    /// Flatten one trial record under its configuration.
    pub fn new(params: &SimParams, record: &TrialRecord) -> Self {
        Self {
            sim_time: params.horizon,
            m: params.grid.m,
            n: params.grid.n,
            r: params.window.r,
            s: params.window.s,
            fail_rate: params.rates.fail,
            repair_rate: params.rates.repair,
            iteration: record.trial,
            mttf: record.grid_mttf,
            mttr: record.grid_mttr,
            ff: record.first_fail,
            fr: record.first_repair,
            sm_mttf: record.window_mttf_mean,
            sm_mttr: record.window_mttr_mean,
            sm_fails: record.window_fail_count_mean,
            fails: record.grid_fails,
            repairs: record.grid_repairs,
            elapsed_secs: record.elapsed.as_secs_f64(),
        }
    }
}
