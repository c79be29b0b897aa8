//! One component's failure/repair event history.

use lr_core::{ComponentRng, Rates, State};

/// The complete event history of one component over one trial.
///
/// # Invariants
///
/// - `fails` and `repairs` are each strictly increasing.
/// - Events strictly alternate, starting with a fail:
///   `fails[0] < repairs[0] < fails[1] < repairs[1] < …`, so
///   `repairs.len()` is always `fails.len()` or `fails.len() − 1`.
/// - Every epoch is strictly inside `(0, horizon)`; a sojourn that would
///   end at or past the horizon is discarded, not recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentHistory {
    /// Epochs at which the component went down.
    pub fails: Vec<f64>,
    /// Epochs at which the component came back up.
    pub repairs: Vec<f64>,
}

impl ComponentHistory {
    /// Generate a fresh history up to `horizon`.
    ///
    /// Starting up at time 0, repeatedly draw an exponential sojourn at the
    /// current state's rate, accumulate, and record the transition if it
    /// still lands below the horizon.  Sampling is total for positive
    /// rates; callers validate rates before reaching this point.
    pub fn generate(rates: Rates, horizon: f64, rng: &mut ComponentRng) -> Self {
        let mut fails = Vec::new();
        let mut repairs = Vec::new();

        let mut up = true;
        let mut elapsed = 0.0;
        loop {
            let rate = if up { rates.fail } else { rates.repair };
            elapsed += rng.sample_exp(rate);
            if elapsed >= horizon {
                break;
            }
            if up {
                fails.push(elapsed);
            } else {
                repairs.push(elapsed);
            }
            up = !up;
        }

        Self { fails, repairs }
    }

    /// A history with no transitions: up for the whole horizon.
    pub fn always_up() -> Self {
        Self::default()
    }

    /// Total number of recorded transitions.
    #[inline]
    pub fn transition_count(&self) -> usize {
        self.fails.len() + self.repairs.len()
    }

    /// The component's state after its final recorded transition.
    #[inline]
    pub fn final_state(&self) -> State {
        if self.fails.len() > self.repairs.len() { State::Down } else { State::Up }
    }

    /// The combined timeline: `(epoch, resulting state)` pairs in ascending
    /// epoch order, interleaving fails and repairs.
    pub fn timeline(&self) -> Vec<(f64, State)> {
        let mut out = Vec::with_capacity(self.transition_count());
        for (i, &fail) in self.fails.iter().enumerate() {
            out.push((fail, State::Down));
            if let Some(&repair) = self.repairs.get(i) {
                out.push((repair, State::Up));
            }
        }
        out
    }
}
