//! Headless snapshot renderer
//!
//! Generates a puzzle from the usual config and flags, renders it with the
//! same renderer the window uses, and writes a PNG.
//!
//! Usage:
//!   cargo run --bin paintgrid-snapshot -- --seed 7 --out puzzle.png
//!   cargo run --bin paintgrid-snapshot -- --rows 40 --columns 60 --solve

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use paintgrid::cli::GameArgs;
use paintgrid::commands::Damage;
use paintgrid::messages::{GameMsg, Msg};
use paintgrid::model::GameModel;
use paintgrid::render::{GlyphSet, MemorySurface, Renderer};
use paintgrid::update::update;

#[derive(Parser, Debug)]
#[command(
    name = "paintgrid-snapshot",
    about = "Render a generated puzzle to a PNG"
)]
struct Args {
    #[command(flatten)]
    game: GameArgs,

    /// Output PNG path
    #[arg(long, default_value = "paintgrid.png")]
    out: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Cell size in pixels (overrides the configured initial scale)
    #[arg(long)]
    scale: Option<f64>,

    /// Paint every cell before rendering
    #[arg(long)]
    solve: bool,
}

fn save_png(buffer: &[u32], width: u32, height: u32, path: &Path) -> Result<()> {
    // Convert ARGB (0xAARRGGBB) to RGBA bytes
    let mut rgba = Vec::with_capacity(buffer.len() * 4);
    for &pixel in buffer {
        rgba.extend_from_slice(&[
            ((pixel >> 16) & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            (pixel & 0xFF) as u8,
            ((pixel >> 24) & 0xFF) as u8,
        ]);
    }

    let img = image::ImageBuffer::<image::Rgba<u8>, Vec<u8>>::from_raw(width, height, rgba)
        .context("failed to create image buffer")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    img.save(path)
        .with_context(|| format!("saving PNG to {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = args.game.load_config();
    if let Some(scale) = args.scale.filter(|s| s.is_finite() && *s > 0.0) {
        config.initial_scale = scale;
    }

    let mut model = GameModel::from_config(&config, (args.width, args.height))
        .context("generating puzzle")?;
    if args.solve {
        update(&mut model, Msg::Game(GameMsg::Solve));
    }

    let glyphs = match &config.font_path {
        Some(path) => GlyphSet::load(path)?,
        None => GlyphSet::builtin(),
    };
    let mut renderer = Renderer::new(
        args.width,
        args.height,
        &model.palette,
        config.render_style(),
        glyphs,
    );
    let mut surface = MemorySurface::new(args.width, args.height);
    renderer
        .render(&model.grid, &model.view, &Damage::Full, &mut surface)
        .context("rendering puzzle")?;

    save_png(surface.pixels(), args.width, args.height, &args.out)?;
    eprintln!(
        "Rendered {}x{} puzzle with {} colors to {}",
        model.grid.row_count(),
        model.grid.column_count(),
        model.palette.len(),
        args.out.display()
    );
    Ok(())
}
