//! Strictly Tic-Tac-Toe - pure game logic
//!
//! Board, turn and outcome types for a two-player 3x3 game, plus a
//! history-keeping [`Game`] that supports stepping back to any earlier
//! board.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! for pos in [0, 1, 3, 4, 6] {
//!     game.play_index(pos).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(
//!     game.winning_line(),
//!     Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{GameDataError, JumpError, Move, MoveError};
pub use game::{Game, RawGame};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
