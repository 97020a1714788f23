//! Ordered, index-addressable color palettes
//!
//! Derived palettes (grayscale, lightened) are always new values; the source
//! palette is never touched.

use thiserror::Error;

use crate::color::{Color, ColorParseError};

/// Errors from building or indexing a palette
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette slot {index} has no color")]
    MissingColor { index: usize },

    #[error("palette slot {index} has an invalid color: {source}")]
    InvalidColor {
        index: usize,
        #[source]
        source: ColorParseError,
    },

    #[error("palette index {index} out of range (palette has {len} colors)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot build {requested} unique colors (at most {max} exist)")]
    TooLarge { requested: usize, max: usize },
}

/// An ordered, fixed-length sequence of colors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Build from optional slots, failing on the first empty one
    pub fn from_slots(slots: Vec<Option<Color>>) -> Result<Self, PaletteError> {
        let colors = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(PaletteError::MissingColor { index }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Build from `#rrggbb` strings
    pub fn from_hex_list<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Color::from_hex(s.as_ref())
                    .map_err(|source| PaletteError::InvalidColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Snapshot of the colors, order preserved
    pub fn colors(&self) -> Vec<Color> {
        self.colors.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Every color replaced by the unweighted average of its channels
    pub fn to_grayscale(&self) -> Palette {
        let colors = self
            .colors
            .iter()
            .map(|color| {
                let rgb = color.to_rgb();
                let average = (rgb.r + rgb.g + rgb.b) / 3.0;
                Color::rgb(average, average, average)
            })
            .collect();
        Palette::new(colors)
    }

    /// Lighten every color: `l' = (l + (100 - l) * factor) % 100`
    ///
    /// A lightness landing on exactly 100 wraps to 0 (white becomes black).
    pub fn lighten(&self, factor: f64) -> Palette {
        let colors = self
            .colors
            .iter()
            .map(|color| {
                let hsl = color.to_hsl();
                let l = (hsl.l + (100.0 - hsl.l) * factor) % 100.0;
                Color::hsl(hsl.h, hsl.s, l)
            })
            .collect();
        Palette::new(colors)
    }

    pub fn get(&self, index: usize) -> Result<&Color, PaletteError> {
        self.colors.get(index).ok_or(PaletteError::IndexOutOfRange {
            index,
            len: self.colors.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
