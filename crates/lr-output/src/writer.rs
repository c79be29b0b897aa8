//! The `SweepWriter` trait implemented by backend writers.

use crate::{OutputResult, SweepRow};

/// Trait implemented by sweep output backends.
pub trait SweepWriter {
    /// Write one row.
    fn write_row(&mut self, row: &SweepRow) -> OutputResult<()>;

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
