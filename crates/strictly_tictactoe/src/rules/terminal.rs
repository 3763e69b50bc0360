//! Terminal detection and scoring.

use super::super::{Board, Outcome, Player};
use super::{is_full, winner};
use tracing::instrument;

/// Returns true if the game is over: somebody won or no square is empty.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board from X's point of view.
///
/// +1 if X has won, -1 if O has won, 0 otherwise. Only meaningful on
/// terminal boards; non-terminal boards score 0.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Winner(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
