//! paintgrid - paint-by-number puzzle on a pannable, zoomable grid
//!
//! This crate provides the core types and logic, following the Elm
//! Architecture: `Msg` values run through `update` against one `GameModel`,
//! which returns a `Cmd` describing what to redraw.

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod factory;
pub mod grid;
pub mod input;
pub mod messages;
pub mod model;
pub mod palette;
pub mod render;
pub mod tracing;
pub mod update;
pub mod viewport;

// Re-export commonly used types
pub use color::Color;
pub use commands::{Cmd, Damage};
pub use config::GameConfig;
pub use grid::{Cell, Grid};
pub use messages::Msg;
pub use model::GameModel;
pub use palette::Palette;
