//! Keyboard shortcuts

use winit::keyboard::{Key, NamedKey};

use paintgrid::messages::{ControlsMsg, GameMsg, Msg, ToolbarMsg};
use paintgrid::model::{Selection, SizeControl, SizeControls};

/// Map a pressed key to a message
///
/// - `G` generate with the current size controls
/// - `C` clear, `S` solve
/// - `1`-`9` select that palette slot, `0` / `Escape` select any
/// - `[` / `]` cycle the selection
/// - `R` / `W` / `P` type a new row / column / color count, `Enter` applies
/// - arrows step rows (up/down) and columns (left/right), `+` / `-` colors
pub fn key_to_msg(key: &Key, controls: &SizeControls) -> Option<Msg> {
    if controls.editing().is_some() {
        return entry_key_to_msg(key).map(Msg::Controls);
    }

    match key {
        Key::Named(NamedKey::Escape) => Some(Msg::select(Selection::Any)),
        Key::Named(NamedKey::ArrowUp) => Some(Msg::step(SizeControl::Rows, 1)),
        Key::Named(NamedKey::ArrowDown) => Some(Msg::step(SizeControl::Rows, -1)),
        Key::Named(NamedKey::ArrowRight) => Some(Msg::step(SizeControl::Columns, 1)),
        Key::Named(NamedKey::ArrowLeft) => Some(Msg::step(SizeControl::Columns, -1)),
        Key::Character(text) => char_to_msg(single_char(text)?.to_ascii_lowercase(), controls),
        _ => None,
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

/// Keys while a size control entry is open
fn entry_key_to_msg(key: &Key) -> Option<ControlsMsg> {
    match key {
        Key::Named(NamedKey::Enter) => Some(ControlsMsg::Commit),
        Key::Named(NamedKey::Escape) => Some(ControlsMsg::Cancel),
        Key::Named(NamedKey::Backspace) => Some(ControlsMsg::Backspace),
        Key::Character(text) => single_char(text).map(ControlsMsg::Input),
        _ => None,
    }
}

fn char_to_msg(ch: char, controls: &SizeControls) -> Option<Msg> {
    match ch {
        'g' => Some(Msg::generate(
            controls.rows(),
            controls.columns(),
            controls.palette_size(),
        )),
        'c' => Some(Msg::Game(GameMsg::Clear)),
        's' => Some(Msg::Game(GameMsg::Solve)),
        'r' => Some(Msg::Controls(ControlsMsg::Edit(SizeControl::Rows))),
        'w' => Some(Msg::Controls(ControlsMsg::Edit(SizeControl::Columns))),
        'p' => Some(Msg::Controls(ControlsMsg::Edit(SizeControl::PaletteSize))),
        '+' | '=' => Some(Msg::step(SizeControl::PaletteSize, 1)),
        '-' => Some(Msg::step(SizeControl::PaletteSize, -1)),
        '0' => Some(Msg::select(Selection::Any)),
        '1'..='9' => {
            let slot = ch.to_digit(10)? as usize - 1;
            Some(Msg::select(Selection::Index(slot)))
        }
        '[' => Some(Msg::Toolbar(ToolbarMsg::Cycle { forward: false })),
        ']' => Some(Msg::Toolbar(ToolbarMsg::Cycle { forward: true })),
        _ => None,
    }
}
