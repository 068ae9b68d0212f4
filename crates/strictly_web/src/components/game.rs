//! Top-level component owning the game state.

use super::Grid;
use leptos::prelude::*;
use strictly_tictactoe::{Game as TicTacToe, Position};
use tracing::{debug, warn};

/// Labels for the time-travel buttons, one per recorded board.
pub fn move_labels(game: &TicTacToe) -> Vec<String> {
    std::iter::once("Go to game start".to_string())
        .chain(
            game.moves()
                .iter()
                .enumerate()
                .map(|(index, mov)| format!("Go to move #{} ({})", index + 1, mov)),
        )
        .collect()
}

/// Owns the authoritative game and re-renders the grid on every change.
///
/// Illegal clicks are dropped without any visible feedback.
#[component]
pub fn Game(
    /// Heading shown above the board.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let game = RwSignal::new(TicTacToe::new());

    let board = Signal::derive(move || game.with(|g| *g.board()));
    let winning_line = Signal::derive(move || game.with(TicTacToe::winning_line));
    let status = move || game.with(|g| g.status().to_string());

    let on_play = Callback::new(move |pos: Position| {
        game.update(|g| {
            if let Err(err) = g.play(pos) {
                debug!(%pos, %err, "Ignoring click");
            }
        });
    });

    let jump = move |step: usize| {
        game.update(|g| {
            if let Err(err) = g.jump_to(step) {
                warn!(%err, "Time travel rejected");
            }
        });
    };

    let moves = move || {
        let (labels, current) = game.with(|g| (move_labels(g), g.step()));
        labels
            .into_iter()
            .enumerate()
            .map(|(step, label)| {
                view! {
                    <li>
                        <button class:current=move || step == current on:click=move |_| jump(step)>
                            {label}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="game">
            <h1>{title}</h1>
            <div class="game-board">
                <Grid board=board on_play=on_play winning_line=winning_line />
            </div>
            <div class="game-info">
                <div class="status">{status}</div>
                <ol>{moves}</ol>
                <button class="restart" on:click=move |_| game.update(TicTacToe::restart)>
                    "Restart"
                </button>
            </div>
        </div>
    }
}
