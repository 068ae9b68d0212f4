//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::super::{Board, Game, Player, Square};
use super::Invariant;

/// Invariant: history starts empty and grows one correctly-owned mark per ply.
///
/// Snapshot `n + 1` equals snapshot `n` plus a single mark placed by the
/// player whose turn it was at ply `n`. Marks are never overwritten.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first() != Some(&Board::new()) || game.step() >= history.len() {
            return false;
        }

        history.windows(2).enumerate().all(|(ply, pair)| {
            let expected = Square::Occupied(Player::for_ply(ply));
            let mut added = 0;
            for (before, after) in pair[0].squares().iter().zip(pair[1].squares()) {
                if before == after {
                    continue;
                }
                if *before != Square::Empty || *after != expected {
                    return false;
                }
                added += 1;
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each board snapshot adds exactly one mark by the player to move"
    }
}
