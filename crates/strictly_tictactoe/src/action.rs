//! First-class action types for tic-tac-toe.
//!
//! An action is the coordinate of the square the side to move wants to mark.
//! The mark itself is never part of the action: it always comes from the
//! board's turn.

use super::position::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move coordinate: 0-indexed row and column.
///
/// Out-of-range coordinates can be represented so that callers receive
/// an explicit [`InvalidAction`] instead of a silently clamped move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Action {
    /// Row, 0 = top.
    pub row: usize,
    /// Column, 0 = left.
    pub col: usize,
}

impl Action {
    /// Returns the square this action targets, if it lies on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_coords(self.row, self.col)
    }
}

impl From<Position> for Action {
    fn from(pos: Position) -> Self {
        pos.action()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when an action does not name an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Action {} is outside the board", _0)]
    OutOfRange(Action),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Action),
}

impl InvalidAction {
    /// The rejected action.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::OutOfRange(action) | InvalidAction::Occupied(action) => *action,
        }
    }
}

impl std::error::Error for InvalidAction {}
