//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::game::Game;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The game must not have been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a terminal board.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.status().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is live and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Postconditions: exactly one ply was added and every game invariant
/// still holds.
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    fn pre(game: &Game, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.step() != before.step() + 1 {
            warn!(before = before.step(), after = after.step(), "Step did not advance by one");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: step must advance by exactly one".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant check failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play_index(pos).unwrap();
        }
        assert_eq!(
            MoveContract::pre(&game, &Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.play(Position::Center).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone();
        after.play(Position::Center).unwrap();

        let mut corrupted: Board = *after.board();
        corrupted.set(Position::TopLeft, Square::Occupied(Player::O));
        after.history[1] = corrupted;

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_single_step() {
        let before = Game::new();
        assert!(MoveContract::post(&before, &before).is_err());
    }
}
