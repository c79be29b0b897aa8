//! Configuration error type.
//!
//! Once a configuration passes validation there is nothing left to fail:
//! exponential sampling with a positive rate is total, and the sweep
//! algorithm accepts any well-formed input.  So this is the only error type
//! the simulation pipeline ever produces, and it is produced exactly once
//! per configuration, before any trial runs.

use thiserror::Error;

/// A rejected simulation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {m}x{n}")]
    EmptyGrid { m: u32, n: u32 },

    #[error("window dimensions must be positive, got {r}x{s}")]
    EmptyWindow { r: u32, s: u32 },

    #[error("window {r}x{s} does not fit in grid {m}x{n}")]
    WindowExceedsGrid { m: u32, n: u32, r: u32, s: u32 },

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("iteration count must be positive")]
    ZeroIterations,
}

/// Shorthand result type for configuration-time validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
