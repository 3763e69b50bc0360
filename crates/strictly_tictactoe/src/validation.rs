//! Board validity checks.
//!
//! Turn inference only works for boards reachable by alternating legal
//! play from the empty board. Callers accepting boards from outside
//! (command line, network, files) should run [`validate`] first.

use super::rules::win::{LINES, line_owner};
use super::{Board, Player};
use tracing::{instrument, warn};

/// A board that could not be parsed or could not arise in a legal game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Board notation did not contain exactly nine cells.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// Board notation contained an unrecognised character.
    #[display("Unknown mark {:?} (use X, O or .)", _0)]
    UnknownMark(char),

    /// X must have as many marks as O, or exactly one more.
    #[display("Invalid piece counts: X={}, O={}", x, o)]
    PieceCounts {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// Both players own a complete line.
    #[display("Both players have three in a row")]
    TwoWinners,

    /// The winner's mark count shows play continued after the win.
    #[display("{} has three in a row but the move counts do not match", _0)]
    PlayAfterWin(Player),
}

impl std::error::Error for BoardError {}

/// Checks that `board` is reachable from the empty board by legal play.
///
/// # Errors
///
/// Returns the first [`BoardError`] found: bad piece counts, two winners,
/// or a win followed by further moves.
#[instrument(skip(board))]
pub fn validate(board: &Board) -> Result<(), BoardError> {
    let x = board.count(Player::X);
    let o = board.count(Player::O);

    if x != o && x != o + 1 {
        warn!(x, o, "Board has impossible piece counts");
        return Err(BoardError::PieceCounts { x, o });
    }

    let x_wins = LINES
        .iter()
        .any(|line| line_owner(board, line) == Some(Player::X));
    let o_wins = LINES
        .iter()
        .any(|line| line_owner(board, line) == Some(Player::O));

    match (x_wins, o_wins) {
        (true, true) => {
            warn!("Board has two winners");
            Err(BoardError::TwoWinners)
        }
        // X's winning move is X's last move, so X is one ahead.
        (true, false) if x != o + 1 => {
            warn!(x, o, "Play continued after X won");
            Err(BoardError::PlayAfterWin(Player::X))
        }
        // O's winning move evens the counts.
        (false, true) if x != o => {
            warn!(x, o, "Play continued after O won");
            Err(BoardError::PlayAfterWin(Player::O))
        }
        _ => Ok(()),
    }
}
