//! Unit tests for lr-renewal.

use lr_core::{ComponentRng, Rates, State};

use crate::ComponentHistory;

fn gen_history(seed: u64, trial: u32, component: usize) -> ComponentHistory {
    let mut rng = ComponentRng::new(seed, trial, component);
    ComponentHistory::generate(Rates::new(10.0, 7.5), 50.0, &mut rng)
}

#[cfg(test)]
mod generate {
    use super::*;

    #[test]
    fn epochs_strictly_increase_and_interleave() {
        for component in 0..32 {
            let h = gen_history(42, 0, component);
            // fails[0] < repairs[0] < fails[1] < repairs[1] < …
            for i in 0..h.fails.len() {
                if i > 0 {
                    assert!(h.repairs[i - 1] < h.fails[i]);
                }
                if let Some(&r) = h.repairs.get(i) {
                    assert!(h.fails[i] < r);
                }
            }
            // No two consecutive events of the same kind.
            let diff = h.fails.len() as i64 - h.repairs.len() as i64;
            assert!(diff == 0 || diff == 1, "fails/repairs length skew {diff}");
        }
    }

    #[test]
    fn all_epochs_inside_horizon() {
        let h = gen_history(7, 0, 0);
        for &e in h.fails.iter().chain(h.repairs.iter()) {
            assert!(e > 0.0 && e < 50.0, "epoch {e} outside (0, 50)");
        }
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let a = gen_history(99, 2, 5);
        let b = gen_history(99, 2, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn fresh_draws_per_trial() {
        let a = gen_history(99, 0, 5);
        let b = gen_history(99, 1, 5);
        assert_ne!(a, b);
    }

    #[test]
    fn busy_rates_produce_events() {
        // λ = 10 over a horizon of 50 → ~500 expected failures; an empty
        // history would mean the sampler is broken.
        let h = gen_history(1, 0, 0);
        assert!(h.fails.len() > 100, "only {} fails", h.fails.len());
    }
}

#[cfg(test)]
mod timeline {
    use super::*;

    #[test]
    fn interleaves_states() {
        let h = gen_history(3, 0, 0);
        let tl = h.timeline();
        assert_eq!(tl.len(), h.transition_count());
        let mut expected = State::Down;
        let mut prev = 0.0;
        for &(epoch, state) in &tl {
            assert!(epoch > prev);
            assert_eq!(state, expected);
            expected = expected.toggled();
            prev = epoch;
        }
    }

    #[test]
    fn empty_history() {
        let h = ComponentHistory::always_up();
        assert!(h.timeline().is_empty());
        assert_eq!(h.transition_count(), 0);
        assert_eq!(h.final_state(), State::Up);
    }

    #[test]
    fn final_state_tracks_parity() {
        let down = ComponentHistory { fails: vec![1.0], repairs: vec![] };
        assert_eq!(down.final_state(), State::Down);
        let up = ComponentHistory { fails: vec![1.0], repairs: vec![2.0] };
        assert_eq!(up.final_state(), State::Up);
    }
}
