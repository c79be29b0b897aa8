//! sweep — full parameter sweep for the lattice_rel availability model.
//!
//! Enumerates the cartesian product of grid geometries, window geometries,
//! rate pairs, and horizons; runs five trials per configuration; writes one
//! CSV row per trial to `final_simulation_results.csv`.  Long horizons are
//! skipped on the largest grids to keep total runtime reasonable.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lr_core::{GridDims, Rates, SimParams, WindowDims};
use lr_output::{CsvSweepWriter, SweepPlan, SweepRow, SweepWriter};
use lr_sim::simulate;

// ── Sweep parameters ──────────────────────────────────────────────────────────

const GRIDS: [(u32, u32); 6] = [(3, 3), (5, 5), (10, 10), (25, 25), (30, 30), (50, 50)];
const WINDOWS: [(u32, u32); 5] = [(2, 2), (3, 3), (5, 5), (8, 8), (10, 10)];
const RATES: [(f64, f64); 4] = [(10.0, 10.0), (10.0, 7.5), (10.0, 5.0), (10.0, 2.5)];
const HORIZONS: [f64; 3] = [50.0, 75.0, 100.0];
const ITERATIONS: u32 = 5;
const SEED: u64 = 42;

const OUTPUT_PATH: &str = "final_simulation_results.csv";

/// Long horizons on the biggest grids dominate the sweep's runtime for no
/// extra insight; drop them.
fn keep(params: &SimParams) -> bool {
    !(params.horizon > 50.0 && params.grid.m > 25)
}

fn main() -> Result<()> {
    let plan = SweepPlan {
        grids: GRIDS.iter().map(|&(m, n)| GridDims::new(m, n)).collect(),
        windows: WINDOWS.iter().map(|&(r, s)| WindowDims::new(r, s)).collect(),
        rates: RATES.iter().map(|&(f, r)| Rates::new(f, r)).collect(),
        horizons: HORIZONS.to_vec(),
        iterations: ITERATIONS,
        seed: SEED,
    };

    let mut writer = CsvSweepWriter::create(Path::new(OUTPUT_PATH))?;
    let started = Instant::now();
    let mut rows = 0usize;
    let mut completed = 0usize;
    let mut skipped = 0usize;

    for params in plan.configurations() {
        if !keep(&params) {
            continue;
        }
        println!(
            "grid {} window {} rates ({}, {}) horizon {}",
            params.grid, params.window, params.rates.fail, params.rates.repair, params.horizon,
        );
        match simulate(&params) {
            Ok(records) => {
                for record in &records {
                    writer.write_row(&SweepRow::new(&params, record))?;
                    rows += 1;
                }
                completed += 1;
            }
            Err(err) => {
                // Skip-and-continue: a window that does not fit this grid is
                // a normal by-product of the cartesian product.
                eprintln!("  skipped: {err}");
                skipped += 1;
            }
        }
    }
    writer.finish()?;

    println!(
        "wrote {rows} rows for {completed} configurations ({skipped} skipped) to {OUTPUT_PATH} in {:.1?}",
        started.elapsed(),
    );
    Ok(())
}
