//! Unit tests for lr-output.

use std::fs;
use std::time::Duration;

use lr_core::{GridDims, Rates, SimParams, WindowDims};
use lr_sim::TrialRecord;

use crate::{CsvSweepWriter, SweepPlan, SweepRow, SweepWriter};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sample_params() -> SimParams {
    SimParams {
        horizon: 50.0,
        iterations: 2,
        grid: GridDims::new(3, 3),
        window: WindowDims::new(2, 2),
        rates: Rates::new(10.0, 7.5),
        seed: 42,
    }
}

fn sample_record(trial: u32) -> TrialRecord {
    TrialRecord {
        trial,
        grid_mttf: 1.25,
        grid_mttr: 0.5,
        grid_uptime: 40.0,
        grid_downtime: 10.0,
        grid_fails: 20,
        grid_repairs: 20,
        first_fail: Some(0.75),
        first_repair: Some(1.5),
        window_mttf_mean: 2.5,
        window_mttr_mean: 0.25,
        window_fail_count_mean: 8.5,
        elapsed: Duration::from_millis(12),
    }
}

/// In-memory writer for driver tests.
#[derive(Default)]
struct VecWriter {
    rows: Vec<SweepRow>,
    finished: u32,
}

impl SweepWriter for VecWriter {
    fn write_row(&mut self, row: &SweepRow) -> crate::OutputResult<()> {
        self.rows.push(row.clone());
        Ok(())
    }
    fn finish(&mut self) -> crate::OutputResult<()> {
        self.finished += 1;
        Ok(())
    }
}

// ── Row flattening ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row {
    use super::*;

    #[test]
    fn carries_configuration_and_statistics() {
        let row = SweepRow::new(&sample_params(), &sample_record(1));
        assert_eq!((row.m, row.n, row.r, row.s), (3, 3, 2, 2));
        assert_eq!(row.sim_time, 50.0);
        assert_eq!(row.iteration, 1);
        assert_eq!(row.mttf, 1.25);
        assert_eq!(row.ff, Some(0.75));
        assert_eq!(row.sm_fails, 8.5);
        assert_eq!(row.elapsed_secs, 0.012);
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_writer {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");

        let mut writer = CsvSweepWriter::create(&path).unwrap();
        writer.write_row(&SweepRow::new(&sample_params(), &sample_record(0))).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap(); // idempotent

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "sim_time,m,n,r,s,fail_rate,repair_rate,iteration,mttf,mttr,\
             ff,fr,sm_mttf,sm_mttr,sm_fails,fails,repairs,elapsed_time"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("50,3,3,2,2,10,7.5,0,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn sentinels_serialize_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");

        let mut record = sample_record(0);
        record.first_fail = None;
        record.first_repair = None;

        let mut writer = CsvSweepWriter::create(&path).unwrap();
        writer.write_row(&SweepRow::new(&sample_params(), &record)).unwrap();
        writer.finish().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("No Failure"));
        assert!(contents.contains("No Repair"));
    }
}

// ── Sweep driver ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep {
    use super::*;

    fn plan() -> SweepPlan {
        SweepPlan {
            grids: vec![GridDims::new(3, 3), GridDims::new(4, 4)],
            windows: vec![WindowDims::new(2, 2), WindowDims::new(4, 4)],
            rates: vec![Rates::new(10.0, 7.5)],
            horizons: vec![25.0],
            iterations: 2,
            seed: 42,
        }
    }

    #[test]
    fn enumerates_cartesian_product() {
        let configs = plan().configurations();
        assert_eq!(configs.len(), 4);
        // Every configuration gets its own seed stream.
        let seeds: std::collections::HashSet<u64> = configs.iter().map(|c| c.seed).collect();
        assert_eq!(seeds.len(), 4);
    }

    #[test]
    fn skips_invalid_configurations_and_continues() {
        // The 4x4 window does not fit the 3x3 grid: one skip, three
        // completed configurations, two rows each.
        let mut writer = VecWriter::default();
        let summary = plan().run(&mut writer).unwrap();
        assert_eq!(summary.completed, 3);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.rows, 6);
        assert_eq!(writer.rows.len(), 6);
        assert_eq!(writer.finished, 1);

        let (bad, _err) = &summary.skipped[0];
        assert_eq!((bad.grid.m, bad.window.r), (3, 4));
    }

    #[test]
    fn filter_limits_the_sweep() {
        let mut writer = VecWriter::default();
        let summary = plan()
            .run_filtered(&mut writer, |p| p.grid.m == 4)
            .unwrap();
        // Only the two 4x4-grid configurations are considered; both fit.
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.skipped.len(), 0);
        assert_eq!(summary.rows, 4);
        assert!(writer.rows.iter().all(|r| r.m == 4));
    }

    #[test]
    fn rows_record_trial_indices_per_configuration() {
        let mut writer = VecWriter::default();
        plan().run(&mut writer).unwrap();
        for pair in writer.rows.chunks(2) {
            assert_eq!(pair[0].iteration, 0);
            assert_eq!(pair[1].iteration, 1);
        }
    }
}
