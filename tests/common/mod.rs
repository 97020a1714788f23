//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use paintgrid::color::Color;
use paintgrid::grid::{Cell, Grid};
use paintgrid::model::GameModel;
use paintgrid::palette::Palette;
use paintgrid::render::{GlyphSet, RenderStyle, Renderer};

pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;

/// Red, green, blue
pub fn rgb_palette() -> Palette {
    Palette::new(vec![
        Color::rgb(255.0, 0.0, 0.0),
        Color::rgb(0.0, 255.0, 0.0),
        Color::rgb(0.0, 0.0, 255.0),
    ])
}

/// Grid from rows of color indices, all unpainted
pub fn grid_from_indices(rows: &[&[usize]]) -> Grid {
    Grid::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|&index| Cell::new(index, false)).collect())
            .collect(),
    )
    .unwrap()
}

/// 3x3 grid over the RGB palette:
///
/// ```text
/// 0 1 2
/// 1 2 0
/// 2 0 1
/// ```
pub fn test_model() -> GameModel {
    let grid = grid_from_indices(&[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]]);
    GameModel::new(grid, rgb_palette())
}

pub fn test_renderer(width: u32, height: u32, palette: &Palette) -> Renderer {
    Renderer::new(
        width,
        height,
        palette,
        RenderStyle::default(),
        GlyphSet::builtin(),
    )
}

/// ARGB fill used for unpainted cells of `color_index`
pub fn uncolored_argb(palette: &Palette, color_index: usize) -> u32 {
    palette
        .to_grayscale()
        .lighten(0.8)
        .get(color_index)
        .unwrap()
        .to_argb_u32()
}

/// Count pixels equal to `color` in the `[x0, x1) x [y0, y1)` region
pub fn count_in_region(
    pixels: &[u32],
    width: usize,
    (x0, y0, x1, y1): (usize, usize, usize, usize),
    color: u32,
) -> usize {
    (y0..y1)
        .flat_map(|y| (x0..x1).map(move |x| (x, y)))
        .filter(|&(x, y)| pixels[y * width + x] == color)
        .count()
}
