//! Game configuration persistence
//!
//! Stores user preferences in `~/.config/paintgrid/config.yaml`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::model::SizeLimits;
use crate::palette::{Palette, PaletteError};
use crate::render::RenderStyle;

/// Game configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rows of the startup puzzle
    pub rows: usize,
    /// Columns of the startup puzzle
    pub columns: usize,
    /// Colors in the startup palette
    pub palette_size: usize,
    /// Initial cell size in pixels
    pub initial_scale: f64,
    /// Multiplicative zoom step per wheel notch
    pub zoom_factor: f64,
    /// Smallest cell size that still shows index labels
    pub index_min_scale: f64,
    /// Lighten factor for unpainted cells
    pub uncolored_lighten: f64,
    /// Background color (`#rrggbb`)
    pub background: String,
    /// Index label color (`#rrggbb`)
    pub index_text: String,
    /// TTF/OTF font for index labels; built-in digits when unset
    pub font_path: Option<PathBuf>,
    /// Seed for puzzle generation; random when unset
    pub seed: Option<u64>,
    /// Fixed startup palette (`#rrggbb` list), replacing the random one
    pub palette: Option<Vec<String>>,
    pub limits: SizeLimits,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            palette_size: 10,
            initial_scale: 20.0,
            zoom_factor: crate::viewport::DEFAULT_ZOOM_FACTOR,
            index_min_scale: 15.0,
            uncolored_lighten: 0.8,
            background: "#ffffff".to_string(),
            index_text: "#000000".to_string(),
            font_path: None,
            seed: None,
            palette: None,
            limits: SizeLimits::default(),
        }
    }
}

impl GameConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<GameConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace values that would break the view or renderer with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.initial_scale.is_finite() && self.initial_scale > 0.0) {
            tracing::warn!("Invalid initial_scale {}, using default", self.initial_scale);
            self.initial_scale = defaults.initial_scale;
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            tracing::warn!("Invalid zoom_factor {}, using default", self.zoom_factor);
            self.zoom_factor = defaults.zoom_factor;
        }
        if !self.uncolored_lighten.is_finite() {
            tracing::warn!("Invalid uncolored_lighten, using default");
            self.uncolored_lighten = defaults.uncolored_lighten;
        }
        self.limits = self.limits.normalized();
        self
    }

    /// Renderer colors and thresholds; unparsable colors fall back to defaults
    pub fn render_style(&self) -> RenderStyle {
        let defaults = RenderStyle::default();
        let parse = |name: &str, value: &str, fallback: u32| match Color::from_hex(value) {
            Ok(color) => color.to_argb_u32(),
            Err(e) => {
                tracing::warn!("Invalid {} color {:?}: {}", name, value, e);
                fallback
            }
        };
        RenderStyle {
            background: parse("background", &self.background, defaults.background),
            index_text: parse("index_text", &self.index_text, defaults.index_text),
            index_min_scale: self.index_min_scale,
            uncolored_lighten: self.uncolored_lighten,
        }
    }

    /// The configured fixed palette, if any
    pub fn fixed_palette(&self) -> Option<Result<Palette, PaletteError>> {
        self.palette.as_deref().map(Palette::from_hex_list)
    }
}
