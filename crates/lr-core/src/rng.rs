//! Deterministic per-component RNG.
//!
//! # Determinism strategy
//!
//! Each (trial, component) pair gets its own independent `SmallRng` seeded
//! by:
//!
//!   seed = global_seed XOR (trial * TRIAL_MIX) XOR (component * COMPONENT_MIX)
//!
//! The mixing constants are odd 64-bit multipliers (the golden-ratio
//! constant and a splitmix64 increment) that spread consecutive indices
//! uniformly across the seed space.  This means:
//!
//! - Components never share RNG state, so history generation parallelises
//!   with no contention and no ordering dependency.
//! - Every trial draws fresh, uncorrelated sojourns — nothing carries over
//!   from the previous trial.
//! - The seed schedule depends only on (seed, trial, component), never on
//!   which worker thread ran the draw, so results are bit-identical whether
//!   the generation phase runs on one thread or many.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for component-index mixing.
const COMPONENT_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// splitmix64 increment, used as the trial-index mixer so trial and
/// component indices land in distinct seed streams.
const TRIAL_MIX: u64 = 0xbf58_476d_1ce4_e5b9;

/// Mix a stream index into a base seed.
///
/// Also used by the sweep driver to derive one independent seed per
/// configuration from the plan's master seed.
#[inline]
pub fn mix_seed(base: u64, stream: u64) -> u64 {
    base ^ stream.wrapping_mul(COMPONENT_MIX)
}

// ── ComponentRng ──────────────────────────────────────────────────────────────

/// Per-component, per-trial deterministic RNG.
///
/// Create one per component at the start of each trial's generation phase.
/// The type is `!Sync` to prevent accidental sharing across threads — each
/// rayon worker holds exactly one.
pub struct ComponentRng(SmallRng);

impl ComponentRng {
    /// Seed deterministically from the run's global seed, the trial index,
    /// and the component's flat grid index.
    pub fn new(global_seed: u64, trial: u32, component: usize) -> Self {
        let seed = global_seed
            ^ (trial as u64).wrapping_mul(TRIAL_MIX)
            ^ (component as u64).wrapping_mul(COMPONENT_MIX);
        ComponentRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw an exponentially distributed sojourn with the given rate.
    ///
    /// Inverse-transform sampling over `Open01`: `u` is strictly inside
    /// (0, 1), so `-ln(u) / rate` is always finite and strictly positive —
    /// the process never fails to produce the next epoch.
    #[inline]
    pub fn sample_exp(&mut self, rate: f64) -> f64 {
        let u: f64 = self.0.sample(rand::distributions::Open01);
        -u.ln() / rate
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
