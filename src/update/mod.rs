//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod controls;
mod game;
mod toolbar;
mod view;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::GameModel;

pub use controls::update_controls;
pub use game::update_game;
pub use toolbar::update_toolbar;
pub use view::update_view;

/// Main update function - dispatches to sub-handlers
///
/// Returns `None` when nothing changed on screen.
pub fn update(model: &mut GameModel, msg: Msg) -> Option<Cmd> {
    let _span = tracing::debug_span!("update", msg = %msg_type_name(&msg)).entered();

    match msg {
        Msg::View(m) => view::update_view(model, m),
        Msg::Game(m) => game::update_game(model, m),
        Msg::Toolbar(m) => toolbar::update_toolbar(model, m),
        Msg::Controls(m) => controls::update_controls(model, m),
    }
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `View::Zoom { delta_y: -1.0 }`
/// - `Game::Solve`
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::View(m) => format!("View::{:?}", m),
        Msg::Game(m) => format!("Game::{:?}", m),
        Msg::Toolbar(m) => format!("Toolbar::{:?}", m),
        Msg::Controls(m) => format!("Controls::{:?}", m),
    }
}
