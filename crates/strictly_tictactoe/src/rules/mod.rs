//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are separated from board
//! storage so the history-keeping game and the invariants share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, winning_line};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Derives the status of `board` after `ply` moves.
///
/// A completed triple wins; otherwise a full board is a draw.
#[instrument(skip(board))]
pub fn status(board: &Board, ply: usize) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(Player::for_ply(ply))
    }
}
