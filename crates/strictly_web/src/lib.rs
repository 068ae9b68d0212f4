//! Strictly Web - browser front end for tic-tac-toe
//!
//! Mounts the [`components::Game`] component into the configured page
//! element and routes `tracing` output to the browser console.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod logging;

pub mod components;

pub use config::WebConfig;
pub use error::{ConfigError, StartError};
pub use logging::{ConsoleMakeWriter, ConsoleMethod, ConsoleWriter};

use components::Game;
use leptos::prelude::*;
use tracing::{info, instrument};
use wasm_bindgen::JsCast;

/// Loads configuration, installs logging and mounts the game.
pub fn start() -> Result<(), StartError> {
    console_error_panic_hook::set_once();

    let config = WebConfig::bundled()?;
    logging::init(&config)?;
    mount(config)
}

#[instrument(skip(config), fields(mount_id = %config.mount_id()))]
fn mount(config: WebConfig) -> Result<(), StartError> {
    let root = document()
        .get_element_by_id(config.mount_id())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| StartError::MissingMountPoint(config.mount_id().clone()))?;

    info!("Mounting game");
    let title = config.title().clone();
    leptos::mount::mount_to(root, move || view! { <Game title=title /> }).forget();
    Ok(())
}
