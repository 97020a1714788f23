//! Palette selector message handlers

use crate::commands::Cmd;
use crate::messages::ToolbarMsg;
use crate::model::GameModel;

/// Handle toolbar messages; selection changes never touch the grid
pub fn update_toolbar(model: &mut GameModel, msg: ToolbarMsg) -> Option<Cmd> {
    match msg {
        ToolbarMsg::Select(selection) => {
            if let Err(e) = model.toolbar.select(selection) {
                tracing::warn!("Ignoring selection: {}", e);
            } else {
                tracing::debug!(?selection, "selected color");
            }
        }
        ToolbarMsg::Cycle { forward } => {
            model.toolbar.cycle(forward);
            tracing::debug!(selection = ?model.toolbar.selected(), "cycled color");
        }
    }
    None
}
