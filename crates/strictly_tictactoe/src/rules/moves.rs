//! Legal action enumeration and move application.

use super::super::{Action, Board, InvalidAction, Position, player};
use tracing::{debug, instrument};

/// Returns every empty square as an action, each exactly once.
///
/// Actions come out in row-major order. Correctness never depends on
/// the order, but a fixed one keeps search results reproducible.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> Vec<Action> {
    Position::ALL
        .iter()
        .filter(|pos| board.is_empty(**pos))
        .map(|pos| pos.action())
        .collect()
}

/// Returns the board that results from the side to move playing `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfRange`] if the coordinates are off the
/// board and [`InvalidAction::Occupied`] if the square is already taken.
#[instrument(level = "trace", skip(board, action), fields(%action))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    let pos = action.position().ok_or_else(|| {
        debug!(%action, "Rejected off-board action");
        InvalidAction::OutOfRange(action)
    })?;

    if !board.is_empty(pos) {
        debug!(%action, "Rejected action on occupied square");
        return Err(InvalidAction::Occupied(action));
    }

    Ok(board.with_mark(pos, player(board)))
}
