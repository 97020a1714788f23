//! Rendering of the grid onto a pixel surface
//!
//! All drawing goes into a back buffer owned by the `Renderer`; the finished
//! frame is presented onto the visible `Surface` with a single blit.

pub mod frame;
pub mod glyphs;

pub use frame::{blend_colors, Frame, Rect};
pub use glyphs::GlyphSet;

use anyhow::Result;

use crate::color::Color;
use crate::commands::Damage;
use crate::grid::{Cell, Grid};
use crate::palette::{Palette, PaletteError};
use crate::viewport::{GridPos, View};

/// Index label height relative to the cell size
pub const TEXT_SIZE_RATIO: f64 = 0.6;

/// A visible pixel destination (window surface, image, test buffer)
pub trait Surface {
    /// Current size in pixels
    fn size(&self) -> (u32, u32);

    /// Replace the surface contents with `pixels` (ARGB, row-major)
    fn blit(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<()>;
}

/// Surface backed by a plain pixel vector
#[derive(Debug, Clone)]
pub struct MemorySurface {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    blits: usize,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize],
            width,
            height,
            blits: 0,
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), or 0 outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            0
        }
    }

    /// Number of frames presented so far
    pub fn blit_count(&self) -> usize {
        self.blits
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize];
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn blit(&mut self, pixels: &[u32], width: u32, height: u32) -> Result<()> {
        if (width, height) != (self.width, self.height) {
            anyhow::bail!(
                "blit of {}x{} onto {}x{} surface",
                width,
                height,
                self.width,
                self.height
            );
        }
        self.pixels.copy_from_slice(pixels);
        self.blits += 1;
        Ok(())
    }
}

/// Colors and thresholds used when drawing cells
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// ARGB fill for the area outside the grid
    pub background: u32,
    /// ARGB color of the index labels
    pub index_text: u32,
    /// Labels are drawn only when the cell size reaches this many pixels
    pub index_min_scale: f64,
    /// Lighten factor for the uncolored (grayscale) palette
    pub uncolored_lighten: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: 0xFFFFFFFF,
            index_text: 0xFF000000,
            index_min_scale: 15.0,
            uncolored_lighten: 0.8,
        }
    }
}

/// Per-cell drawing state shared by full and single-cell redraws
struct CellPainter<'a> {
    colored: &'a [u32],
    uncolored: &'a [u32],
    style: &'a RenderStyle,
    glyphs: &'a mut GlyphSet,
}

impl CellPainter<'_> {
    fn paint(
        &mut self,
        frame: &mut Frame,
        view: &View,
        pos: GridPos,
        cell: &Cell,
    ) -> Result<(), PaletteError> {
        let index = cell.color_index();
        let colors = if cell.is_colored {
            self.colored
        } else {
            self.uncolored
        };
        let fill = *colors.get(index).ok_or(PaletteError::IndexOutOfRange {
            index,
            len: colors.len(),
        })?;

        let (x, y) = view.grid_to_screen(pos.row, pos.column);
        let rect = Rect::new(x, y, view.scale, view.scale);
        frame.fill_rect(rect, fill);

        if !cell.is_colored && view.scale >= self.style.index_min_scale {
            frame.set_clip(rect);
            self.glyphs.draw_centered(
                frame,
                &(index + 1).to_string(),
                x + view.scale / 2.0,
                y + view.scale / 2.0,
                view.scale * TEXT_SIZE_RATIO,
                self.style.index_text,
            );
            frame.clear_clip();
        }
        Ok(())
    }
}

/// Owns the back buffer and the palette-derived fill colors
#[derive(Debug)]
pub struct Renderer {
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    colored: Vec<u32>,
    uncolored: Vec<u32>,
    style: RenderStyle,
    glyphs: GlyphSet,
}

impl Renderer {
    pub fn new(
        width: u32,
        height: u32,
        palette: &Palette,
        style: RenderStyle,
        glyphs: GlyphSet,
    ) -> Self {
        let mut renderer = Self {
            back_buffer: vec![style.background; width as usize * height as usize],
            width,
            height,
            colored: Vec::new(),
            uncolored: Vec::new(),
            style,
            glyphs,
        };
        renderer.set_palette(palette);
        renderer
    }

    /// Replace the palette, recomputing the uncolored variant
    pub fn set_palette(&mut self, palette: &Palette) {
        let uncolored = palette
            .to_grayscale()
            .lighten(self.style.uncolored_lighten);
        self.colored = palette.iter().map(Color::to_argb_u32).collect();
        self.uncolored = uncolored.iter().map(Color::to_argb_u32).collect();
        tracing::debug!(colors = palette.len(), "renderer palette updated");
    }

    /// Resize the back buffer; contents are reset to the background
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.back_buffer = vec![self.style.background; width as usize * height as usize];
        tracing::debug!(width, height, "renderer resized");
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// The back buffer as last drawn (ARGB, row-major)
    pub fn buffer(&self) -> &[u32] {
        &self.back_buffer
    }

    fn split(&mut self) -> (Frame<'_>, CellPainter<'_>) {
        let frame = Frame::new(
            &mut self.back_buffer,
            self.width as usize,
            self.height as usize,
        );
        let painter = CellPainter {
            colored: &self.colored,
            uncolored: &self.uncolored,
            style: &self.style,
            glyphs: &mut self.glyphs,
        };
        (frame, painter)
    }

    /// Redraw the whole back buffer
    pub fn draw_grid(&mut self, grid: &Grid, view: &View) -> Result<(), PaletteError> {
        let range = view
            .visible_range(self.width, self.height)
            .clamped_to(grid.row_count(), grid.column_count());
        let background = self.style.background;
        let (mut frame, mut painter) = self.split();
        frame.clear(background);

        for pos in range.iter().flat_map(|range| range.positions()) {
            if let Some(cell) = grid.cell_at(pos.row, pos.column) {
                painter.paint(&mut frame, view, pos, cell)?;
            }
        }
        Ok(())
    }

    /// Redraw one cell in place; absent cells are ignored
    pub fn draw_cell(
        &mut self,
        grid: &Grid,
        view: &View,
        pos: GridPos,
    ) -> Result<(), PaletteError> {
        let Some(cell) = grid.cell_at(pos.row, pos.column) else {
            return Ok(());
        };
        let (mut frame, mut painter) = self.split();
        painter.paint(&mut frame, view, pos, cell)
    }

    /// Draw what `damage` names and present the result in one blit
    ///
    /// A surface whose size differs from the back buffer forces a full redraw
    /// at the new size. `Damage::None` on an unchanged surface presents nothing.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        grid: &Grid,
        view: &View,
        damage: &Damage,
        surface: &mut S,
    ) -> Result<()> {
        let (width, height) = surface.size();
        let resized = (width, height) != (self.width, self.height);
        if resized {
            self.resize(width, height);
        }

        match damage {
            _ if resized => self.draw_grid(grid, view)?,
            Damage::None => return Ok(()),
            Damage::Full => self.draw_grid(grid, view)?,
            Damage::Cells(cells) => {
                for &pos in cells {
                    self.draw_cell(grid, view, pos)?;
                }
            }
        }

        surface.blit(&self.back_buffer, self.width, self.height)
    }
}
