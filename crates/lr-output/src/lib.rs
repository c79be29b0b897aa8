//! `lr-output` — sweep persistence for the lattice_rel simulator.
//!
//! The simulation core owns no on-disk format; this crate does.  It turns
//! trial records into flat rows — one per (configuration, trial) — and
//! streams them through a [`SweepWriter`] backend (CSV is the only one
//! provided), driven by a [`SweepPlan`] that enumerates the cartesian
//! product of parameter lists.
//!
//! Raw timelines are never persisted, only the per-trial statistics.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lr_output::{CsvSweepWriter, SweepPlan};
//!
//! let mut writer = CsvSweepWriter::create(Path::new("results.csv"))?;
//! let summary = plan.run(&mut writer)?;
//! println!("{} rows, {} configurations skipped", summary.rows, summary.skipped.len());
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod sweep;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvSweepWriter;
pub use error::{OutputError, OutputResult};
pub use row::SweepRow;
pub use sweep::{SweepPlan, SweepSummary};
pub use writer::SweepWriter;
