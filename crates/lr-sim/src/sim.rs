//! The `Simulation` struct and its trial loop.

use std::time::Instant;

use lr_core::{ComponentRng, ConfigResult, SimParams};
use lr_renewal::ComponentHistory;
use lr_timeline::{AggregateTimeline, Redundancy, aggregate};
use lr_window::{Window, partition};

use crate::{NoopObserver, TrialObserver, TrialRecord};

/// A validated simulation configuration, ready to run.
///
/// Construction validates geometry and rates once and computes window
/// membership once (it depends only on geometry).  After that, nothing can
/// fail: [`run`][Self::run] is total.
pub struct Simulation {
    params: SimParams,
    windows: Vec<Window>,
}

impl Simulation {
    /// Validate `params` and precompute window membership.
    pub fn new(params: SimParams) -> ConfigResult<Self> {
        params.validate()?;
        let windows = partition(params.grid, params.window)?;
        Ok(Self { params, windows })
    }

    /// The configuration this simulation was built from.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Window membership, fixed for the lifetime of the simulation.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Run all trials sequentially, invoking `observer` around each one.
    ///
    /// Trials are independent: each regenerates every component history
    /// from its own seed stream and assembles a fresh record.
    pub fn run<O: TrialObserver>(&self, observer: &mut O) -> Vec<TrialRecord> {
        let records = (0..self.params.iterations)
            .map(|trial| {
                observer.on_trial_start(trial);
                let record = self.run_trial(trial);
                observer.on_trial_end(trial, &record);
                record
            })
            .collect();
        observer.on_sim_end(self.params.iterations);
        records
    }

    // ── Core trial processing ─────────────────────────────────────────────

    fn run_trial(&self, trial: u32) -> TrialRecord {
        let started = Instant::now();
        let horizon = self.params.horizon;

        // ── Phase 1: generate component histories ─────────────────────────
        //
        // Components share no mutable state; each draws from its own
        // (trial, component)-seeded stream.  collect() is the join barrier
        // before window aggregation reads the histories.
        let histories = self.generate_histories(trial);

        // ── Phase 2: window-level aggregation ─────────────────────────────
        //
        // Each window only reads its member components' histories.  Joined
        // before phase 3, which reads every window's fail/repair lists.
        let window_timelines = self.aggregate_windows(&histories);

        // ── Phase 3: grid-level aggregation ───────────────────────────────
        let grid = aggregate(window_timelines.iter(), Redundancy::AnyMemberDown, horizon);

        // ── Assemble the record ───────────────────────────────────────────
        let window_count = window_timelines.len() as f64;
        let window_mttf_mean =
            window_timelines.iter().map(AggregateTimeline::mean_uptime).sum::<f64>() / window_count;
        let window_mttr_mean = window_timelines
            .iter()
            .map(AggregateTimeline::mean_downtime)
            .sum::<f64>()
            / window_count;
        let window_fail_count_mean =
            window_timelines.iter().map(|w| w.fails.len() as f64).sum::<f64>() / window_count;

        let first_fail = window_timelines
            .iter()
            .filter_map(|w| w.first_fail)
            .min_by(f64::total_cmp);
        let first_repair = window_timelines
            .iter()
            .filter_map(|w| w.first_repair)
            .min_by(f64::total_cmp);

        TrialRecord {
            trial,
            grid_mttf: grid.mean_uptime(),
            grid_mttr: grid.mean_downtime(),
            grid_uptime: grid.uptime,
            grid_downtime: grid.downtime,
            grid_fails: grid.fails.len() as u32,
            grid_repairs: grid.repairs.len() as u32,
            first_fail,
            first_repair,
            window_mttf_mean,
            window_mttr_mean,
            window_fail_count_mean,
            elapsed: started.elapsed(),
        }
    }

    /// Phase 1: one fresh history per component.
    fn generate_histories(&self, trial: u32) -> Vec<ComponentHistory> {
        let count = self.params.grid.component_count();
        let rates = self.params.rates;
        let horizon = self.params.horizon;
        let seed = self.params.seed;

        #[cfg(not(feature = "parallel"))]
        {
            (0..count)
                .map(|component| {
                    let mut rng = ComponentRng::new(seed, trial, component);
                    ComponentHistory::generate(rates, horizon, &mut rng)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            (0..count)
                .into_par_iter()
                .map(|component| {
                    let mut rng = ComponentRng::new(seed, trial, component);
                    ComponentHistory::generate(rates, horizon, &mut rng)
                })
                .collect()
        }
    }

    /// Phase 2: one timeline per window, under OR-redundancy.
    fn aggregate_windows(&self, histories: &[ComponentHistory]) -> Vec<AggregateTimeline> {
        let horizon = self.params.horizon;

        #[cfg(not(feature = "parallel"))]
        {
            self.windows
                .iter()
                .map(|w| {
                    aggregate(
                        w.members.iter().map(|&i| &histories[i as usize]),
                        Redundancy::AllMembersDown,
                        horizon,
                    )
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.windows
                .par_iter()
                .map(|w| {
                    aggregate(
                        w.members.iter().map(|&i| &histories[i as usize]),
                        Redundancy::AllMembersDown,
                        horizon,
                    )
                })
                .collect()
        }
    }
}

/// Validate, run, and collect all trial records in one call.
pub fn simulate(params: &SimParams) -> ConfigResult<Vec<TrialRecord>> {
    Ok(Simulation::new(params.clone())?.run(&mut NoopObserver))
}
