//! `lr-window` — sliding-window partitioning of the grid.
//!
//! A window is a fixed `r × s` rectangle of components, one window per
//! top-left anchor, `(m−r+1)·(n−s+1)` in total.  Windows overlap: a
//! component generally belongs to several of them.  Membership depends
//! only on geometry, so it is computed once per configuration and shared
//! by every trial.

pub mod partition;


pub use partition::{Window, partition};
