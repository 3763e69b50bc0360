//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Position};

/// Strictly Minimax - perfect-play tic-tac-toe
///
/// Boards are written as nine cells in row-major order using X, O and `.`,
/// optionally split into rows with `/`, e.g. `X.O/.X./...`.
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Perfect-play tic-tac-toe solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Search configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    Best {
        /// Board to analyse
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let minimax play both sides until the game ends
    Play {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        from: Option<Board>,

        /// Square to play first instead of the searched move, e.g. `center`
        #[arg(long, value_parser = parse_position)]
        opening: Option<Position>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Parses a square by its label, e.g. `top-left` or `Center`.
fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label(s).ok_or_else(|| {
        let labels: Vec<_> = Position::ALL.iter().map(|p| p.label()).collect();
        format!("unknown square {:?} (expected one of: {})", s, labels.join(", "))
    })
}
