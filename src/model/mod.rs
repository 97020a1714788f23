//! Game model - the complete state of the puzzle
//!
//! One owned aggregate passed `&mut` into `update`. The toolbar and size
//! controls are plain fields rather than looked up by name.

pub mod controls;
pub mod toolbar;

pub use controls::{Bounds, SizeControl, SizeControls, SizeLimits, TextEntry};
pub use toolbar::{Selection, Toolbar};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::config::GameConfig;
use crate::factory::{build_random_grid, build_random_palette};
use crate::grid::{Grid, GridError};
use crate::palette::{Palette, PaletteError};
use crate::viewport::{View, DEFAULT_ZOOM_FACTOR};

/// Errors from generating a new puzzle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// The complete game model
#[derive(Debug)]
pub struct GameModel {
    pub grid: Grid,
    pub palette: Palette,
    pub view: View,
    pub toolbar: Toolbar,
    pub controls: SizeControls,
    /// Surface size in pixels; zoom is anchored at its center
    pub window_size: (u32, u32),
    pub zoom_factor: f64,
    rng: StdRng,
}

impl GameModel {
    /// Model over an existing grid and palette with default view and controls
    pub fn new(grid: Grid, palette: Palette) -> Self {
        Self {
            grid,
            toolbar: Toolbar::new(palette.clone()),
            palette,
            view: View::default(),
            controls: SizeControls::new(SizeLimits::default(), 20, 20, 10),
            window_size: (800, 600),
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Build the startup puzzle described by `config`
    ///
    /// A configured fixed palette replaces the random one; if it fails to
    /// parse, a random palette is used instead.
    pub fn from_config(
        config: &GameConfig,
        window_size: (u32, u32),
    ) -> Result<Self, GenerateError> {
        let controls = SizeControls::new(
            config.limits,
            config.rows,
            config.columns,
            config.palette_size,
        );
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let palette = match config.fixed_palette() {
            Some(Ok(palette)) if !palette.is_empty() => palette,
            Some(Ok(_)) => {
                tracing::warn!("Configured palette is empty, generating one");
                build_random_palette(controls.palette_size(), &mut rng)?
            }
            Some(Err(e)) => {
                tracing::warn!("Invalid configured palette ({}), generating one", e);
                build_random_palette(controls.palette_size(), &mut rng)?
            }
            None => build_random_palette(controls.palette_size(), &mut rng)?,
        };
        let grid = build_random_grid(
            controls.rows(),
            controls.columns(),
            palette.len(),
            false,
            &mut rng,
        )?;

        tracing::info!(
            rows = controls.rows(),
            columns = controls.columns(),
            colors = palette.len(),
            "startup puzzle ready"
        );

        Ok(Self {
            grid,
            toolbar: Toolbar::new(palette.clone()),
            palette,
            view: View::new(0.0, 0.0, config.initial_scale),
            controls,
            window_size,
            zoom_factor: config.zoom_factor,
            rng,
        })
    }

    /// Replace palette and grid with new random ones, all cells unpainted
    ///
    /// On error the model is left unchanged.
    pub fn regenerate(
        &mut self,
        rows: usize,
        columns: usize,
        palette_size: usize,
    ) -> Result<(), GenerateError> {
        let palette = build_random_palette(palette_size, &mut self.rng)?;
        let grid = build_random_grid(rows, columns, palette.len(), false, &mut self.rng)?;

        self.toolbar.set_palette(palette.clone());
        self.palette = palette;
        self.grid = grid;
        Ok(())
    }
}
