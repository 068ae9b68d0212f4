//! Single winner invariant: both players never complete a triple.

use super::super::rules::WINNING_LINES;
use super::super::{Board, Game, Player, Square};
use super::Invariant;

/// Invariant: on every recorded board at most one player owns a triple.
pub struct SingleWinnerInvariant;

fn owns_line(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)))
}

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .all(|board| !(owns_line(board, Player::X) && owns_line(board, Player::O)))
    }

    fn description() -> &'static str {
        "At most one player completes a winning line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_won_game_holds() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play_index(pos).unwrap();
        }
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_two_winners_violate() {
        let mut game = Game::new();
        let board = &mut game.history[0];
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::X));
        }
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert!(!SingleWinnerInvariant::holds(&game));
    }
}
