//! A single clickable board position.

use leptos::prelude::*;
use strictly_tictactoe::Square;

/// Renders one square's mark and reports clicks upward.
///
/// Holds no state; an empty square renders as a blank button.
#[component]
pub fn Cell(
    /// Mark shown in this position.
    #[prop(into)]
    square: Signal<Square>,
    /// Invoked with no arguments when the button is clicked.
    #[prop(into)]
    on_click: Callback<()>,
    /// Marks the square as part of the winning line.
    #[prop(optional, into)]
    highlighted: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <button
            class="square"
            class:winning=move || highlighted.is_some_and(|h| h.get())
            on:click=move |_| on_click.run(())
        >
            {move || square.get().symbol()}
        </button>
    }
}
