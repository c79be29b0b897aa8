//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{NO_FAILURE, NO_REPAIR};
use crate::writer::SweepWriter;
use crate::{OutputResult, SweepRow};

/// Column header, in row order.
const HEADER: [&str; 18] = [
    "sim_time", "m", "n", "r", "s", "fail_rate", "repair_rate", "iteration", "mttf", "mttr",
    "ff", "fr", "sm_mttf", "sm_mttr", "sm_fails", "fails", "repairs", "elapsed_time",
];

/// Writes sweep rows to a single CSV file.
pub struct CsvSweepWriter {
    rows: Writer<File>,
    finished: bool,
}

impl CsvSweepWriter {
    /// Open (or create) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(path)?;
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }
}

impl SweepWriter for CsvSweepWriter {
    fn write_row(&mut self, row: &SweepRow) -> OutputResult<()> {
        let ff = row.ff.map_or_else(|| NO_FAILURE.to_string(), |e| e.to_string());
        let fr = row.fr.map_or_else(|| NO_REPAIR.to_string(), |e| e.to_string());
        self.rows.write_record(&[
            row.sim_time.to_string(),
            row.m.to_string(),
            row.n.to_string(),
            row.r.to_string(),
            row.s.to_string(),
            row.fail_rate.to_string(),
            row.repair_rate.to_string(),
            row.iteration.to_string(),
            row.mttf.to_string(),
            row.mttr.to_string(),
            ff,
            fr,
            row.sm_mttf.to_string(),
            row.sm_mttr.to_string(),
            row.sm_fails.to_string(),
            row.fails.to_string(),
            row.repairs.to_string(),
            row.elapsed_secs.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
