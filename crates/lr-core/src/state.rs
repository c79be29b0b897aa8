//! Up/down component state.

use std::fmt;

/// Operational state of a component, window, or the grid.
///
/// Everything starts [`State::Up`] at epoch 0.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    Up,
    Down,
}

impl State {
    #[inline]
    pub fn is_up(self) -> bool {
        self == State::Up
    }

    /// The state after one transition.
    #[inline]
    pub fn toggled(self) -> State {
        match self {
            State::Up => State::Down,
            State::Down => State::Up,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Up => "up",
            State::Down => "down",
        })
    }
}
