//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Lines checked for a win, in precedence order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first complete line in
/// [`LINES`] order, `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

/// Returns the player owning all three squares of `line`, if any.
pub(crate) fn line_owner(board: &Board, [a, b, c]: &[Position; 3]) -> Option<Player> {
    let sq = board.get(*a);
    if sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c) {
        return match sq {
            Square::Occupied(player) => Some(player),
            Square::Empty => None,
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO./XO./.O.")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("O.X/.OX/..O")), Some(Player::O));
        assert_eq!(winner(&board("O.X/.XO/X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./O../O..")), None);
    }

    #[test]
    fn test_rows_take_precedence() {
        // Not reachable by legal play, but the answer must still be stable.
        assert_eq!(winner(&board("OOO/XXX/...")), Some(Player::O));
        assert_eq!(winner(&board("XO./XO./XO.")), Some(Player::X));
    }
}
