//! 3x3 layout of cells.

use super::Cell;
use leptos::prelude::*;
use strictly_tictactoe::{Board, Position};

/// Binds a cell's no-argument click to `on_play` at its fixed position.
pub fn bind_cell<F>(on_play: F, pos: Position) -> impl Fn(()) + Send + Sync + 'static
where
    F: Fn(Position) + Send + Sync + 'static,
{
    move |()| on_play(pos)
}

/// Lays out nine `Cell`s in three rows.
///
/// Each cell's click is bound to its fixed position before being passed
/// to `on_play`.
#[component]
pub fn Grid(
    /// Board whose marks are displayed.
    #[prop(into)]
    board: Signal<Board>,
    /// Receives the position of the clicked cell.
    #[prop(into)]
    on_play: Callback<Position>,
    /// Triple to highlight once the game is won.
    #[prop(optional, into)]
    winning_line: Option<Signal<Option<[Position; 3]>>>,
) -> impl IntoView {
    let rows = Position::ROWS
        .into_iter()
        .map(|row| {
            let cells = row
                .into_iter()
                .map(|pos| {
                    let square = Signal::derive(move || board.get().get(pos));
                    let highlighted = Signal::derive(move || {
                        winning_line
                            .and_then(|line| line.get())
                            .is_some_and(|line| line.contains(&pos))
                    });
                    let on_click = Callback::new(bind_cell(move |p| on_play.run(p), pos));
                    view! { <Cell square=square on_click=on_click highlighted=highlighted /> }
                })
                .collect_view();
            view! { <div class="board-row">{cells}</div> }
        })
        .collect_view();

    view! { <div class="board">{rows}</div> }
}
