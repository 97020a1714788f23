//! Size control message handlers
//!
//! Control values only feed the next `Generate`; nothing is redrawn here.

use crate::commands::Cmd;
use crate::messages::ControlsMsg;
use crate::model::GameModel;

pub fn update_controls(model: &mut GameModel, msg: ControlsMsg) -> Option<Cmd> {
    let controls = &mut model.controls;
    match msg {
        ControlsMsg::Edit(control) => {
            controls.begin_edit(control);
            tracing::debug!(control = control.label(), "editing size control");
        }
        ControlsMsg::Input(ch) => controls.push_char(ch),
        ControlsMsg::Backspace => controls.pop_char(),
        ControlsMsg::Commit => {
            if let Some((control, value)) = controls.commit_edit() {
                tracing::info!(control = control.label(), value, "size control set");
            }
        }
        ControlsMsg::Cancel => controls.cancel_edit(),
        ControlsMsg::Step { control, delta } => {
            let value = controls.step(control, delta);
            tracing::debug!(control = control.label(), value, "size control stepped");
        }
    }
    None
}
