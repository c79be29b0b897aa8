//! `lr-core` — foundational types for the `lattice_rel` availability
//! simulator.
//!
//! This crate is a dependency of every other `lr-*` crate.  It intentionally
//! has no `lr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`geometry`] | `GridDims`, `WindowDims`, `Coord`                     |
//! | [`params`]   | `Rates`, `SimParams`                                  |
//! | [`state`]    | `State` (up/down)                                     |
//! | [`rng`]      | `ComponentRng` (per-component, per-trial), `mix_seed` |
//! | [`error`]    | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geometry;
pub mod params;
pub mod rng;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use geometry::{Coord, GridDims, WindowDims};
pub use params::{Rates, SimParams};
pub use rng::{ComponentRng, mix_seed};
pub use state::State;
