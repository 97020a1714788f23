//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::viewport::GridPos;

// ============================================================================
// Damage Tracking (partial redraw optimization)
// ============================================================================

/// Represents which parts of the surface need redrawing
///
/// Painting a cell only needs that cell redrawn; anything that moves the view
/// or touches many cells redraws everything. When in doubt, use `Damage::Full`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Damage {
    /// No redraw needed (default state for accumulation)
    #[default]
    None,
    /// Redraw everything (always safe fallback)
    Full,
    /// Redraw specific cells only
    Cells(Vec<GridPos>),
}

impl Damage {
    /// Damage for a single cell
    pub fn cell(pos: GridPos) -> Self {
        Damage::Cells(vec![pos])
    }

    /// Merge another damage into this one
    ///
    /// If either damage is Full, the result is Full.
    /// If either damage is None, the other takes precedence.
    /// Otherwise, cell lists are combined with deduplication.
    pub fn merge(&mut self, other: Damage) {
        match (&mut *self, other) {
            (Damage::None, other) => *self = other,
            (_, Damage::None) => {}
            (Damage::Full, _) => {}
            (this, Damage::Full) => *this = Damage::Full,
            (Damage::Cells(cells), Damage::Cells(other_cells)) => {
                for pos in other_cells {
                    if !cells.contains(&pos) {
                        cells.push(pos);
                    }
                }
            }
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Damage::Full)
    }

    /// Check if any redraw is needed
    pub fn needs_redraw(&self) -> bool {
        match self {
            Damage::None => false,
            Damage::Full => true,
            Damage::Cells(cells) => !cells.is_empty(),
        }
    }
}

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Redraw the given damage and present it
    Redraw(Damage),
    /// The model's palette was replaced; the renderer must pick it up before
    /// the next redraw
    PaletteChanged,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn redraw_full() -> Self {
        Cmd::Redraw(Damage::Full)
    }

    pub fn redraw_cell(pos: GridPos) -> Self {
        Cmd::Redraw(Damage::cell(pos))
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        self.damage().needs_redraw()
    }

    /// Check if this command (or any batched one) replaces the palette
    pub fn changes_palette(&self) -> bool {
        match self {
            Cmd::PaletteChanged => true,
            Cmd::Redraw(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::changes_palette),
        }
    }

    /// Get the damage for this command
    ///
    /// For batch commands, merges all sub-command damages.
    pub fn damage(&self) -> Damage {
        match self {
            Cmd::Redraw(damage) => damage.clone(),
            Cmd::PaletteChanged => Damage::None,
            Cmd::Batch(cmds) => {
                let mut damage = Damage::None;
                for cmd in cmds {
                    damage.merge(cmd.damage());
                    if damage.is_full() {
                        break;
                    }
                }
                damage
            }
        }
    }
}
