//! Random puzzle generation
//!
//! Palettes are built from unique random 24-bit colors; grids pick a random
//! palette slot per cell.

use std::collections::HashSet;

use rand::Rng;

use crate::color::Color;
use crate::grid::{Cell, Grid, GridError};
use crate::palette::{Palette, PaletteError};

/// Number of distinct 8-bit RGB colors
pub const MAX_UNIQUE_COLORS: usize = 1 << 24;

/// Build a palette of `size` unique random colors
///
/// Uniqueness is by hex encoding, the same key `Color` equality uses.
pub fn build_random_palette<R: Rng + ?Sized>(
    size: usize,
    rng: &mut R,
) -> Result<Palette, PaletteError> {
    if size > MAX_UNIQUE_COLORS {
        return Err(PaletteError::TooLarge {
            requested: size,
            max: MAX_UNIQUE_COLORS,
        });
    }

    let mut seen = HashSet::with_capacity(size);
    let mut colors = Vec::with_capacity(size);

    while colors.len() < size {
        let color = Color::rgb(
            rng.gen_range(0..=255u8) as f64,
            rng.gen_range(0..=255u8) as f64,
            rng.gen_range(0..=255u8) as f64,
        );
        if seen.insert(color) {
            colors.push(color);
        }
    }

    tracing::debug!(size, "built random palette");
    Ok(Palette::new(colors))
}

/// Build a `rows x columns` grid with random color indices in `0..palette_len`
pub fn build_random_grid<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    palette_len: usize,
    colored: bool,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let cells = (0..rows)
        .map(|_| {
            (0..columns)
                .map(|_| {
                    let index = if palette_len == 0 {
                        0
                    } else {
                        rng.gen_range(0..palette_len)
                    };
                    Cell::new(index, colored)
                })
                .collect()
        })
        .collect();

    let grid = Grid::from_rows(cells)?;
    tracing::debug!(rows, columns, palette_len, "built random grid");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_palette_colors_are_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        let palette = build_random_palette(200, &mut rng).unwrap();
        assert_eq!(palette.len(), 200);

        let unique: HashSet<String> = palette.iter().map(Color::to_hex).collect();
        assert_eq!(unique.len(), 200);
    }

    #[test]
    fn test_palette_channels_are_integers() {
        let mut rng = StdRng::seed_from_u64(1);
        let palette = build_random_palette(20, &mut rng).unwrap();
        for color in palette.iter() {
            let rgb = color.to_rgb();
            for channel in [rgb.r, rgb.g, rgb.b] {
                assert_eq!(channel.fract(), 0.0);
                assert!((0.0..=255.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_palette_too_large() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            build_random_palette(MAX_UNIQUE_COLORS + 1, &mut rng),
            Err(PaletteError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = build_random_palette(10, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = build_random_palette(10, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let g1 = build_random_grid(5, 5, 10, false, &mut StdRng::seed_from_u64(3)).unwrap();
        let g2 = build_random_grid(5, 5, 10, false, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_grid_indices_within_palette() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = build_random_grid(12, 7, 4, false, &mut rng).unwrap();
        assert_eq!(grid.row_count(), 12);
        assert_eq!(grid.column_count(), 7);
        assert!(grid
            .iter()
            .all(|(_, _, cell)| cell.color_index() < 4 && !cell.is_colored));
    }

    #[test]
    fn test_grid_can_start_colored() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = build_random_grid(3, 3, 4, true, &mut rng).unwrap();
        assert!(grid.all_colored());
    }

    #[test]
    fn test_zero_rows_is_an_error() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(
            build_random_grid(0, 3, 4, false, &mut rng),
            Err(GridError::Empty)
        );
    }
}
