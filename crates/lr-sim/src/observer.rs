//! Trial observer trait for progress reporting.

use crate::TrialRecord;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] around
/// each trial.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl TrialObserver for ProgressPrinter {
///     fn on_trial_end(&mut self, trial: u32, record: &TrialRecord) {
///         println!("trial {trial}: grid downtime {}", record.grid_downtime);
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called before a trial's generation phase starts.
    fn on_trial_start(&mut self, _trial: u32) {}

    /// Called after a trial's record has been assembled.
    fn on_trial_end(&mut self, _trial: u32, _record: &TrialRecord) {}

    /// Called once after the last trial completes.
    fn on_sim_end(&mut self, _trials: u32) {}
}

/// A [`TrialObserver`] that does nothing.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
