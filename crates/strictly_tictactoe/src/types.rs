//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::validation::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used in board notation.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Parses a single notation character.
    ///
    /// `X` and `O` (either case) are marks; `.`, `-` and `_` are empty.
    pub fn from_mark(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '.' | '-' | '_' => Some(Square::Empty),
            _ => None,
        }
    }

    /// Notation character for this square.
    pub fn mark(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain `Copy` values. Applying an action produces a new board
/// and never touches the one it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from its three rows, top to bottom.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * 3..row * 3 + 3].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// No legality checks are made; use [`crate::result`] for rule-checked moves.
    #[must_use]
    pub fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.squares[pos.to_index()] = Square::Occupied(player);
        self
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.squares[row * 3 + col].mark())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cells in row-major order, e.g. `"XO./.X./..O"`.
    ///
    /// `/` and whitespace separate rows and are otherwise ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;
        for c in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let square = Square::from_mark(c).ok_or(BoardError::UnknownMark(c))?;
            if count < 9 {
                squares[count] = square;
            }
            count += 1;
        }
        if count != 9 {
            return Err(BoardError::WrongLength(count));
        }
        Ok(Self { squares })
    }
}

/// Classification of a board by line-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player owns a complete line.
    Winner(Player),
    /// The board is full with no complete line.
    Draw,
    /// Empty squares remain and nobody has won.
    InProgress,
}

/// Returns the starting board: all nine squares empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// The turn is inferred by counting marks: +1 for every X, -1 for every O.
/// A count of exactly one means X has just moved and O is next; anything
/// else hands the move to X. This is only meaningful for boards reachable
/// by alternating play; see [`crate::validate`].
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    let turn: i32 = board
        .squares()
        .iter()
        .map(|s| match s {
            Square::Occupied(Player::X) => 1,
            Square::Occupied(Player::O) => -1,
            Square::Empty => 0,
        })
        .sum();

    if turn == 1 { Player::O } else { Player::X }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player(&initial_state()), Player::X);
    }

    #[test]
    fn test_turn_alternates() {
        let board = initial_state().with_mark(Position::Center, Player::X);
        assert_eq!(player(&board), Player::O);

        let board = board.with_mark(Position::TopLeft, Player::O);
        assert_eq!(player(&board), Player::X);
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let board = Board::from_rows([[x, e, e], [e, o, e], [e, e, x]]);
        assert_eq!(board.get(Position::TopLeft), x);
        assert_eq!(board.get(Position::Center), o);
        assert_eq!(board.get(Position::BottomRight), x);
        assert_eq!(board.filled(), 3);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");

        let again: Board = board.to_string().parse().unwrap();
        assert_eq!(again, board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(BoardError::WrongLength(2)));
        assert_eq!(
            "XOXOXOXOXO".parse::<Board>(),
            Err(BoardError::WrongLength(10))
        );
        assert_eq!("XO?......".parse::<Board>(), Err(BoardError::UnknownMark('?')));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = initial_state();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert!(!next.is_empty(Position::Center));
    }
}
