//! View message handlers (pan, zoom, resize)

use crate::commands::Cmd;
use crate::messages::ViewMsg;
use crate::model::GameModel;

/// Handle view messages; every one of them moves pixels, so all redraw fully
pub fn update_view(model: &mut GameModel, msg: ViewMsg) -> Option<Cmd> {
    match msg {
        ViewMsg::Pan { dx, dy } => {
            model.view.pan(dx, dy);
            tracing::trace!(
                offset_x = model.view.offset_x,
                offset_y = model.view.offset_y,
                "panned"
            );
            Some(Cmd::redraw_full())
        }

        ViewMsg::Zoom { delta_y } => {
            let (width, height) = model.window_size;
            model
                .view
                .zoom_notch(delta_y, model.zoom_factor, width, height);
            tracing::debug!(scale = model.view.scale, "zoomed");
            Some(Cmd::redraw_full())
        }

        ViewMsg::Resize { width, height } => {
            model.window_size = (width, height);
            Some(Cmd::redraw_full())
        }
    }
}
