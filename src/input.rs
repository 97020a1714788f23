//! Pointer and surface events, translated into messages
//!
//! The window runtime reduces platform events to `InputEvent`s; `translate`
//! decides which of them become `Msg`s. Drag-to-pan needs the secondary
//! button alone; painting needs the primary button alone.

use std::ops::BitOr;

use crate::messages::Msg;

/// Pressed pointer buttons as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Buttons(pub u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const PRIMARY: Buttons = Buttons(1);
    pub const SECONDARY: Buttons = Buttons(2);

    pub fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn with(self, other: Buttons, pressed: bool) -> Buttons {
        if pressed {
            Buttons(self.0 | other.0)
        } else {
            Buttons(self.0 & !other.0)
        }
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// Platform-neutral input event (surface pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved by `(dx, dy)` to `(x, y)` with `buttons` held
    PointerMove {
        dx: f64,
        dy: f64,
        buttons: Buttons,
        x: f64,
        y: f64,
    },
    /// Wheel turned; negative is toward the user's content (zoom in)
    Wheel { delta_y: f64 },
    /// A button went down at `(x, y)`; `buttons` is the state after the press
    PointerDown { buttons: Buttons, x: f64, y: f64 },
    Resize { width: u32, height: u32 },
}

/// Map an input event to a message, if it has one
pub fn translate(event: InputEvent) -> Option<Msg> {
    match event {
        InputEvent::PointerMove {
            dx, dy, buttons, ..
        } if buttons == Buttons::SECONDARY => Some(Msg::pan(dx, dy)),
        InputEvent::PointerMove { buttons, x, y, .. } if buttons == Buttons::PRIMARY => {
            Some(Msg::paint(x, y))
        }
        InputEvent::PointerMove { .. } => None,
        InputEvent::PointerDown { buttons, x, y } if buttons == Buttons::PRIMARY => {
            Some(Msg::paint(x, y))
        }
        InputEvent::PointerDown { .. } => None,
        InputEvent::Wheel { delta_y } => Some(Msg::zoom(delta_y)),
        InputEvent::Resize { width, height } => Some(Msg::resize(width, height)),
    }
}
