//! Palette selector state
//!
//! Holds its own copy of the current palette so selections can be validated
//! without reaching into the rest of the model.

use crate::palette::{Palette, PaletteError};

/// Which color the user paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Paints any cell regardless of its color index
    #[default]
    Any,
    /// Paints only cells with this palette index
    Index(usize),
}

impl Selection {
    /// Whether a cell with `color_index` may be painted under this selection
    pub fn matches(&self, color_index: usize) -> bool {
        match self {
            Selection::Any => true,
            Selection::Index(index) => *index == color_index,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    palette: Palette,
    selected: Selection,
}

impl Toolbar {
    pub fn new(palette: Palette) -> Self {
        let mut toolbar = Self::default();
        toolbar.set_palette(palette);
        toolbar
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selected(&self) -> Selection {
        self.selected
    }

    /// Replace the palette and reset the selection to the first slot
    pub fn set_palette(&mut self, palette: Palette) {
        self.selected = if palette.is_empty() {
            Selection::Any
        } else {
            Selection::Index(0)
        };
        self.palette = palette;
    }

    /// Select a slot (must exist in the palette) or `Any`
    pub fn select(&mut self, selection: Selection) -> Result<(), PaletteError> {
        if let Selection::Index(index) = selection {
            self.palette.get(index)?;
        }
        self.selected = selection;
        Ok(())
    }

    /// Step through `Any, 0, 1, .., n - 1` with wraparound
    pub fn cycle(&mut self, forward: bool) {
        let len = self.palette.len();
        // Position 0 is Any, position i + 1 is Index(i)
        let position = match self.selected {
            Selection::Any => 0,
            Selection::Index(index) => index + 1,
        };
        let count = len + 1;
        let next = if forward {
            (position + 1) % count
        } else {
            (position + count - 1) % count
        };
        self.selected = match next {
            0 => Selection::Any,
            n => Selection::Index(n - 1),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn palette(len: usize) -> Palette {
        Palette::new(
            (0..len)
                .map(|i| Color::rgb(i as f64 * 10.0, 0.0, 0.0))
                .collect(),
        )
    }

    #[test]
    fn test_set_palette_resets_to_first() {
        let mut toolbar = Toolbar::new(palette(3));
        toolbar.select(Selection::Index(2)).unwrap();
        toolbar.set_palette(palette(5));
        assert_eq!(toolbar.selected(), Selection::Index(0));
        assert_eq!(toolbar.palette().len(), 5);
    }

    #[test]
    fn test_select_is_bounds_checked() {
        let mut toolbar = Toolbar::new(palette(3));
        assert_eq!(
            toolbar.select(Selection::Index(3)),
            Err(PaletteError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(toolbar.selected(), Selection::Index(0));

        toolbar.select(Selection::Any).unwrap();
        assert_eq!(toolbar.selected(), Selection::Any);
    }

    #[test]
    fn test_cycle_wraps_through_any() {
        let mut toolbar = Toolbar::new(palette(2));
        toolbar.cycle(true);
        assert_eq!(toolbar.selected(), Selection::Index(1));
        toolbar.cycle(true);
        assert_eq!(toolbar.selected(), Selection::Any);
        toolbar.cycle(true);
        assert_eq!(toolbar.selected(), Selection::Index(0));
        toolbar.cycle(false);
        assert_eq!(toolbar.selected(), Selection::Any);
        toolbar.cycle(false);
        assert_eq!(toolbar.selected(), Selection::Index(1));
    }

    #[test]
    fn test_empty_palette_selects_any() {
        let toolbar = Toolbar::new(Palette::default());
        assert_eq!(toolbar.selected(), Selection::Any);
    }

    #[test]
    fn test_selection_matches() {
        assert!(Selection::Any.matches(7));
        assert!(Selection::Index(2).matches(2));
        assert!(!Selection::Index(2).matches(3));
    }
}
