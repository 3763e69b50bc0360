//! Strictly Tic-Tac-Toe - pure game logic and perfect-play search.
//!
//! The crate never performs I/O. Callers hand it a [`Board`] and get back
//! legal actions, successor boards, outcomes, or the optimal move.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Position`], [`Action`]
//! - **Rules**: [`actions`], [`result`], [`winner`], [`terminal`], [`utility`]
//! - **Search**: [`minimax`] with alpha-beta pruning, configured by [`SearchConfig`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action).expect("minimax only returns legal actions");
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod position;
mod rules;
mod search;
mod types;
mod validation;

pub use action::{Action, InvalidAction};
pub use config::{ConfigError, SearchConfig};
pub use position::Position;
pub use rules::{actions, is_full, outcome, result, terminal, utility, winner};
pub use search::{Evaluation, Search, SearchStats, maximize, minimax, minimize, value};
pub use types::{Board, Outcome, Player, Square, initial_state, player};
pub use validation::{BoardError, validate};
