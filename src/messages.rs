//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{Selection, SizeControl};

/// View messages (panning, zooming, surface size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMsg {
    /// Drag the content by a screen-space delta (pixels)
    Pan { dx: f64, dy: f64 },
    /// One wheel notch; negative zooms in, anything else zooms out
    Zoom { delta_y: f64 },
    /// Surface resized (physical pixels)
    Resize { width: u32, height: u32 },
}

/// Puzzle messages (painting and whole-grid operations)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameMsg {
    /// Paint the cell under a surface pixel
    Paint { x: f64, y: f64 },
    /// Unpaint every cell
    Clear,
    /// Paint every cell
    Solve,
    /// Replace palette and grid with freshly generated ones
    Generate {
        rows: usize,
        columns: usize,
        palette_size: usize,
    },
}

/// Palette selector messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarMsg {
    /// Select a palette slot or `Any`
    Select(Selection),
    /// Step the selection forward (`true`) or backward, wrapping through `Any`
    Cycle { forward: bool },
}

/// Size control messages (typed entry and nudging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsMsg {
    /// Start typing a new value for a control
    Edit(SizeControl),
    /// Append a typed character to the open entry
    Input(char),
    /// Remove the last typed character
    Backspace,
    /// Apply the open entry
    Commit,
    /// Drop the open entry
    Cancel,
    /// Move a control by `delta`
    Step { control: SizeControl, delta: i64 },
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    View(ViewMsg),
    Game(GameMsg),
    Toolbar(ToolbarMsg),
    Controls(ControlsMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn pan(dx: f64, dy: f64) -> Self {
        Msg::View(ViewMsg::Pan { dx, dy })
    }

    pub fn zoom(delta_y: f64) -> Self {
        Msg::View(ViewMsg::Zoom { delta_y })
    }

    pub fn resize(width: u32, height: u32) -> Self {
        Msg::View(ViewMsg::Resize { width, height })
    }

    pub fn paint(x: f64, y: f64) -> Self {
        Msg::Game(GameMsg::Paint { x, y })
    }

    pub fn generate(rows: usize, columns: usize, palette_size: usize) -> Self {
        Msg::Game(GameMsg::Generate {
            rows,
            columns,
            palette_size,
        })
    }

    pub fn select(selection: Selection) -> Self {
        Msg::Toolbar(ToolbarMsg::Select(selection))
    }

    pub fn step(control: SizeControl, delta: i64) -> Self {
        Msg::Controls(ControlsMsg::Step { control, delta })
    }
}
