//! `lr-sim` — trial orchestration for the lattice_rel simulator.
//!
//! # Three-phase trial
//!
//! ```text
//! for trial in 0..iterations:            (trials strictly sequential)
//!   ① Generate  — fresh ComponentHistory per component
//!                 (embarrassingly parallel, joined before ②)
//!   ② Windows   — aggregate each window's member histories under
//!                 AllMembersDown (parallel across windows, joined before ③)
//!   ③ Grid      — aggregate all window timelines under AnyMemberDown,
//!                 then assemble one fresh TrialRecord
//! ```
//!
//! Every trial recomputes its derived state from scratch; no aggregator
//! state survives an iteration boundary.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                             |
//! |------------|----------------------------------------------------|
//! | `parallel` | Runs phases ① and ② on Rayon's thread pool.        |
//! | `serde`    | Adds `Serialize`/`Deserialize` to `TrialRecord`.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lr_core::{GridDims, Rates, SimParams, WindowDims};
//! use lr_sim::simulate;
//!
//! let records = simulate(&SimParams {
//!     horizon: 50.0,
//!     iterations: 5,
//!     grid: GridDims::new(5, 5),
//!     window: WindowDims::new(2, 2),
//!     rates: Rates::new(10.0, 7.5),
//!     seed: 42,
//! })?;
//! ```

pub mod observer;
pub mod record;
pub mod sim;


pub use observer::{NoopObserver, TrialObserver};
pub use record::TrialRecord;
pub use sim::{Simulation, simulate};
