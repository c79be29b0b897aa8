//! `lr-timeline` — the timeline-aggregation sweep.
//!
//! The one algorithm with real content in this workspace, used at two
//! levels:
//!
//! - **window level**: merge member *components'* histories under
//!   [`Redundancy::AllMembersDown`] — the window is down only while every
//!   member is down (the window tolerates any single surviving member);
//! - **grid level**: merge *windows'* derived histories under
//!   [`Redundancy::AnyMemberDown`] — the grid is down while any window is
//!   down.
//!
//! The asymmetry is the model: local redundancy inside a window, a global
//! single point of failure across windows.  Both levels run the same sweep
//! in [`aggregate`], differing only in counter start value, delta sign,
//! and down-predicate.
//!
//! Timelines are ordered `(epoch, State)` vectors built by sorting — never
//! float-keyed maps, which would be exposed to float-equality pitfalls.

pub mod aggregate;


pub use aggregate::{AggregateTimeline, Redundancy, TransitionSource, aggregate};
