//! History-keeping game state for tic-tac-toe.
//!
//! The game stores one board snapshot per ply and a cursor into that
//! history. The player to move and the status are always derived from
//! the board under the cursor.

use super::action::{GameDataError, JumpError, Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with full move history and time travel.
///
/// Deserialization goes through [`RawGame`], so a decoded game always
/// satisfies the same invariants as one built by play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    /// Board snapshots; `history[0]` is the empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the snapshot currently shown and played.
    pub(crate) step: usize,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns every recorded board, including any undone future.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the current step (number of plies on the shown board).
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the player to move, derived from the step parity.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.step)
    }

    /// Returns the status of the board at the current step.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board(), self.step)
    }

    /// Returns the winning triple on the current board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.board()).map(|(_, line)| line)
    }

    /// Reconstructs the moves that produced each snapshot.
    ///
    /// Entry `n` is the move leading from `history[n]` to `history[n + 1]`.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| placed_between(&pair[0], &pair[1]))
            .collect()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Any history after the current step is discarded. Rejected moves
    /// leave the game untouched.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` once the game is won or drawn, and
    /// `MoveError::SquareOccupied` if the square is taken.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        MoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let mut board = *self.board();
        board.set(pos, Square::Occupied(player));

        self.history.truncate(self.step + 1);
        self.history.push(board);
        self.step += 1;

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            *self = before;
            return Err(err);
        }

        let status = self.status();
        info!(%pos, %status, "Move applied");
        debug!(board = %self.board().display(), "Board after move");
        Ok(status)
    }

    /// Places the current player's mark at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` for indices past 8, otherwise as
    /// [`Game::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Moves the cursor to a previously recorded step.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::StepOutOfRange` if `step` was never recorded.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!(status = %self.status(), "Jumped to step");
        Ok(())
    }

    /// Discards all history and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`Game`].
#[derive(Debug, Deserialize)]
pub struct RawGame {
    history: Vec<Board>,
    step: usize,
}

impl TryFrom<RawGame> for Game {
    type Error = GameDataError;

    #[instrument(skip(raw), fields(len = raw.history.len(), step = raw.step))]
    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        if raw.history.is_empty() {
            return Err(GameDataError::EmptyHistory);
        }
        if raw.step >= raw.history.len() {
            return Err(GameDataError::StepOutOfRange {
                step: raw.step,
                len: raw.history.len(),
            });
        }

        let game = Game {
            history: raw.history,
            step: raw.step,
        };
        TicTacToeInvariants::check_all(&game).map_err(|violations| {
            GameDataError::InvariantViolation(
                violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;
        Ok(game)
    }
}

/// Finds the single mark added going from `before` to `after`.
fn placed_between(before: &Board, after: &Board) -> Option<Move> {
    Position::ALL.into_iter().find_map(|pos| {
        match (before.get(pos), after.get(pos)) {
            (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.step(), 0);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_play_alternates_players() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.to_move(), Player::O);
        game.play(Position::TopLeft).unwrap();
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();
        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_index_out_of_bounds() {
        let mut game = Game::new();
        assert_eq!(game.play_index(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_moves_reconstructed_from_history() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        game.play(Position::BottomRight).unwrap();
        assert_eq!(
            game.moves(),
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::BottomRight),
            ]
        );
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        game.restart();
        assert_eq!(game, Game::new());
    }
}
