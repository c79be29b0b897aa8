//! Unit tests for lr-core primitives.

#[cfg(test)]
mod geometry {
    use crate::{ConfigError, Coord, GridDims, WindowDims};

    #[test]
    fn index_roundtrip() {
        let grid = GridDims::new(3, 5);
        for i in 0..grid.component_count() {
            assert_eq!(grid.index(grid.coord(i)), i);
        }
        assert_eq!(grid.index(Coord::new(2, 4)), 14);
    }

    #[test]
    fn component_count() {
        assert_eq!(GridDims::new(4, 4).component_count(), 16);
        assert_eq!(GridDims::new(1, 7).component_count(), 7);
    }

    #[test]
    fn window_fits() {
        let grid = GridDims::new(5, 5);
        assert!(grid.check_window(WindowDims::new(5, 5)).is_ok());
        assert!(grid.check_window(WindowDims::new(1, 1)).is_ok());
    }

    #[test]
    fn window_too_large_rejected() {
        let grid = GridDims::new(3, 3);
        assert_eq!(
            grid.check_window(WindowDims::new(4, 2)),
            Err(ConfigError::WindowExceedsGrid { m: 3, n: 3, r: 4, s: 2 })
        );
        assert_eq!(
            grid.check_window(WindowDims::new(2, 4)),
            Err(ConfigError::WindowExceedsGrid { m: 3, n: 3, r: 2, s: 4 })
        );
    }

    #[test]
    fn zero_dims_rejected() {
        assert!(GridDims::new(0, 3).check().is_err());
        assert!(
            GridDims::new(3, 3)
                .check_window(WindowDims::new(0, 1))
                .is_err()
        );
    }

    #[test]
    fn display() {
        assert_eq!(GridDims::new(3, 4).to_string(), "3x4");
        assert_eq!(WindowDims::new(2, 2).to_string(), "2x2");
        assert_eq!(Coord::new(1, 2).to_string(), "(1,2)");
    }
}

#[cfg(test)]
mod params {
    use crate::{ConfigError, GridDims, Rates, SimParams, WindowDims};

    fn valid() -> SimParams {
        SimParams {
            horizon: 50.0,
            iterations: 5,
            grid: GridDims::new(5, 5),
            window: WindowDims::new(2, 2),
            rates: Rates::new(10.0, 7.5),
            seed: 42,
        }
    }

    #[test]
    fn accepts_valid() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_rates() {
        let mut p = valid();
        p.rates.fail = 0.0;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::NonPositive { what: "failure rate", .. })
        ));

        let mut p = valid();
        p.rates.repair = -1.0;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::NonPositive { what: "repair rate", .. })
        ));
    }

    #[test]
    fn rejects_nonpositive_horizon() {
        let mut p = valid();
        p.horizon = 0.0;
        assert!(matches!(
            p.validate(),
            Err(ConfigError::NonPositive { what: "horizon", .. })
        ));
    }

    #[test]
    fn rejects_nan_horizon() {
        let mut p = valid();
        p.horizon = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut p = valid();
        p.iterations = 0;
        assert_eq!(p.validate(), Err(ConfigError::ZeroIterations));
    }
}

#[cfg(test)]
mod rng {
    use crate::ComponentRng;
    use crate::rng::mix_seed;

    #[test]
    fn exp_samples_are_positive_and_finite() {
        let mut rng = ComponentRng::new(42, 0, 0);
        for _ in 0..10_000 {
            let x = rng.sample_exp(10.0);
            assert!(x.is_finite() && x > 0.0, "got {x}");
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = ComponentRng::new(7, 3, 11);
        let mut b = ComponentRng::new(7, 3, 11);
        for _ in 0..100 {
            assert_eq!(a.sample_exp(2.0).to_bits(), b.sample_exp(2.0).to_bits());
        }
    }

    #[test]
    fn distinct_components_get_distinct_streams() {
        let mut a = ComponentRng::new(7, 0, 0);
        let mut b = ComponentRng::new(7, 0, 1);
        let draws_a: Vec<u64> = (0..8).map(|_| a.sample_exp(1.0).to_bits()).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.sample_exp(1.0).to_bits()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn distinct_trials_get_distinct_streams() {
        let mut a = ComponentRng::new(7, 0, 5);
        let mut b = ComponentRng::new(7, 1, 5);
        assert_ne!(a.sample_exp(1.0).to_bits(), b.sample_exp(1.0).to_bits());
    }

    #[test]
    fn exp_mean_roughly_inverse_rate() {
        // 20k draws at rate 4 → sample mean within 5% of 0.25.
        let mut rng = ComponentRng::new(1, 0, 0);
        let n = 20_000;
        let sum: f64 = (0..n).map(|_| rng.sample_exp(4.0)).sum();
        let mean = sum / n as f64;
        assert!((mean - 0.25).abs() < 0.0125, "mean {mean}");
    }

    #[test]
    fn mix_seed_distinguishes_streams() {
        assert_ne!(mix_seed(42, 0), mix_seed(42, 1));
        assert_eq!(mix_seed(42, 9), mix_seed(42, 9));
    }
}
