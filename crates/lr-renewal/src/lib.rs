//! `lr-renewal` — per-component alternating-renewal event generation.
//!
//! A component starts up at epoch 0 and alternates between up and down
//! states.  Sojourn times are exponential: rate λ while up, rate μ while
//! down.  [`ComponentHistory::generate`] draws sojourns until the
//! accumulated time reaches the horizon and records every transition that
//! lands strictly before it.
//!
//! Histories are plain values.  Each trial generates a fresh vector of
//! them; nothing is reused across trials.

pub mod history;

#[cfg(test)]
mod tests;

pub use history::ComponentHistory;
