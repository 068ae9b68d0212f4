//! Leptos components, leaf first: `Cell` inside `Grid` inside `Game`.

mod cell;
mod game;
mod grid;

pub use cell::Cell;
pub use game::{Game, move_labels};
pub use grid::{Grid, bind_cell};
