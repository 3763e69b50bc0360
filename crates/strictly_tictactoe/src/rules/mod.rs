//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can compose them freely.

pub mod draw;
pub mod moves;
pub mod terminal;
pub mod win;

pub use draw::is_full;
pub use moves::{actions, result};
pub use terminal::{outcome, terminal, utility};
pub use win::winner;
