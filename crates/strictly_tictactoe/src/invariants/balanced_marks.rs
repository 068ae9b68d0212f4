//! Balanced marks invariant: X leads O by at most one mark.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: every recorded board has X count minus O count in {0, 1}.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        game.history().iter().all(|board| {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(BalancedMarksInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut game = Game::new();
        for pos in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
            game.play_index(pos).unwrap();
        }
        assert!(BalancedMarksInvariant::holds(&game));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut game = Game::new();
        game.history[0].set(Position::Center, Square::Occupied(Player::O));
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}
