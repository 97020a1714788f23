//! Command-line argument parsing
//!
//! Flags override the config file; sizes are clamped later by the size
//! controls, so out-of-range values are accepted here.

use clap::{Args, Parser};
use std::path::PathBuf;

use crate::config::GameConfig;

/// Puzzle options shared by every binary
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Number of grid rows
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Number of grid columns
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Number of palette colors
    #[arg(long, value_name = "N")]
    pub palette_size: Option<usize>,

    /// Seed for puzzle generation
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Config file to use instead of ~/.config/paintgrid/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Paint-by-number puzzle
#[derive(Parser, Debug)]
#[command(name = "paintgrid", version, about = "Paint-by-number puzzle")]
pub struct CliArgs {
    #[command(flatten)]
    pub game: GameArgs,
}

impl GameArgs {
    /// Load the selected config file and apply the flag overrides
    pub fn load_config(&self) -> GameConfig {
        let config = match &self.config {
            Some(path) => GameConfig::load_from(path),
            None => GameConfig::load(),
        };
        self.apply(config)
    }

    /// Apply flag overrides on top of `config`
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(palette_size) = self.palette_size {
            config.palette_size = palette_size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let config = GameArgs::default().apply(GameConfig::default());
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = GameArgs {
            rows: Some(5),
            palette_size: Some(3),
            seed: Some(11),
            ..GameArgs::default()
        };
        let config = args.apply(GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        });
        assert_eq!(config.rows, 5);
        assert_eq!(config.columns, 20);
        assert_eq!(config.palette_size, 3);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "paintgrid",
            "--rows",
            "12",
            "--palette-size",
            "4",
            "--config",
            "/tmp/x.yaml",
        ]);
        assert_eq!(args.game.rows, Some(12));
        assert_eq!(args.game.columns, None);
        assert_eq!(args.game.palette_size, Some(4));
        assert_eq!(args.game.config, Some(PathBuf::from("/tmp/x.yaml")));
    }
}
