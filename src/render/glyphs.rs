//! Glyphs for the color-index labels
//!
//! Labels are short decimal numbers. Without a configured font they are drawn
//! from a built-in 3x5 bitmap digit set scaled in whole pixels; with one they
//! are rasterized by fontdue and alpha-blended.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings, Metrics};

use super::frame::{Frame, Rect};

/// Rasterized glyphs for a single pixel size
///
/// Every label in a frame shares one size, so the cache is emptied whenever
/// the size changes instead of growing with each zoom level visited.
#[derive(Debug, Default)]
pub struct GlyphCache {
    size_bits: u32,
    glyphs: HashMap<char, (Metrics, Vec<u8>)>,
}

impl GlyphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached glyph for `ch` at `size`, rasterized on a miss
    pub fn get_or_insert_with(
        &mut self,
        ch: char,
        size: f32,
        rasterize: impl FnOnce() -> (Metrics, Vec<u8>),
    ) -> &(Metrics, Vec<u8>) {
        if size.to_bits() != self.size_bits {
            self.glyphs.clear();
            self.size_bits = size.to_bits();
        }
        self.glyphs.entry(ch).or_insert_with(rasterize)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Rows of each digit, top to bottom; bit 2 is the leftmost column
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const DIGIT_COLUMNS: usize = 3;
const DIGIT_ROWS: usize = 5;

pub enum GlyphSet {
    Builtin,
    Font { font: Box<Font>, cache: GlyphCache },
}

impl std::fmt::Debug for GlyphSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphSet::Builtin => f.write_str("GlyphSet::Builtin"),
            GlyphSet::Font { cache, .. } => f
                .debug_struct("GlyphSet::Font")
                .field("cached_glyphs", &cache.len())
                .finish(),
        }
    }
}

impl GlyphSet {
    pub fn builtin() -> Self {
        GlyphSet::Builtin
    }

    /// Load a TTF/OTF font from disk
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to load font {}: {}", path.display(), e))?;
        tracing::info!("Loaded index font from {}", path.display());
        Ok(GlyphSet::Font {
            font: Box::new(font),
            cache: GlyphCache::new(),
        })
    }

    /// Draw `text` centered on `(cx, cy)` with a nominal height of `size` pixels
    pub fn draw_centered(
        &mut self,
        frame: &mut Frame,
        text: &str,
        cx: f64,
        cy: f64,
        size: f64,
        color: u32,
    ) {
        match self {
            GlyphSet::Builtin => draw_builtin(frame, text, cx, cy, size, color),
            GlyphSet::Font { font, cache } => {
                draw_font(frame, font, cache, text, cx, cy, size as f32, color)
            }
        }
    }
}

fn draw_builtin(frame: &mut Frame, text: &str, cx: f64, cy: f64, size: f64, color: u32) {
    let px = (size / DIGIT_ROWS as f64).floor().max(1.0);
    let glyph_width = DIGIT_COLUMNS as f64 * px;
    let count = text.chars().count();
    if count == 0 {
        return;
    }

    let total_width = count as f64 * glyph_width + (count - 1) as f64 * px;
    let left = cx - total_width / 2.0;
    let top = cy - DIGIT_ROWS as f64 * px / 2.0;

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = ch.to_digit(10).map(|d| &DIGITS[d as usize]) else {
            continue;
        };
        let glyph_left = left + i as f64 * (glyph_width + px);
        for (row, bits) in rows.iter().enumerate() {
            for column in 0..DIGIT_COLUMNS {
                if bits & (1 << (DIGIT_COLUMNS - 1 - column)) != 0 {
                    frame.fill_rect(
                        Rect::new(
                            glyph_left + column as f64 * px,
                            top + row as f64 * px,
                            px,
                            px,
                        ),
                        color,
                    );
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_font(
    frame: &mut Frame,
    font: &Font,
    cache: &mut GlyphCache,
    text: &str,
    cx: f64,
    cy: f64,
    size: f32,
    color: u32,
) {
    if size <= 0.0 {
        return;
    }

    let width: f32 = text
        .chars()
        .map(|ch| {
            cache
                .get_or_insert_with(ch, size, || font.rasterize(ch, size))
                .0
                .advance_width
        })
        .sum();

    let (ascent, descent) = font
        .horizontal_line_metrics(size)
        .map(|m| (m.ascent, m.descent))
        .unwrap_or((size, 0.0));
    let baseline = cy as f32 + (ascent + descent) / 2.0;
    let mut pen_x = cx as f32 - width / 2.0;

    for ch in text.chars() {
        let (metrics, bitmap) = cache.get_or_insert_with(ch, size, || font.rasterize(ch, size));

        let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;
        for bitmap_y in 0..metrics.height {
            for bitmap_x in 0..metrics.width {
                let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                if alpha == 0 {
                    continue;
                }
                let x = (pen_x + bitmap_x as f32 + metrics.xmin as f32).round();
                let y = (glyph_top + bitmap_y as f32).round();
                if x >= 0.0 && y >= 0.0 {
                    frame.blend_pixel(
                        x as usize,
                        y as usize,
                        ((alpha as u32) << 24) | (color & 0x00FF_FFFF),
                    );
                }
            }
        }
        pen_x += metrics.advance_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: u32 = 0xFF000000;
    const PAPER: u32 = 0xFFFFFFFF;

    fn lit(buffer: &[u32], width: usize) -> Vec<(usize, usize)> {
        buffer
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == INK)
            .map(|(i, _)| (i % width, i / width))
            .collect()
    }

    #[test]
    fn test_builtin_eight_fills_its_box() {
        let mut buffer = vec![PAPER; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        // size 10 -> 2px dots, glyph 6x10 centered on (10, 10)
        GlyphSet::builtin().draw_centered(&mut frame, "8", 10.0, 10.0, 10.0, INK);

        let pixels = lit(&buffer, 20);
        let min_x = pixels.iter().map(|p| p.0).min().unwrap();
        let max_x = pixels.iter().map(|p| p.0).max().unwrap();
        let min_y = pixels.iter().map(|p| p.1).min().unwrap();
        let max_y = pixels.iter().map(|p| p.1).max().unwrap();
        assert_eq!((min_x, max_x), (7, 12));
        assert_eq!((min_y, max_y), (5, 14));
        // Hollow centers of the two loops
        assert_eq!(buffer[7 * 20 + 9], PAPER);
        assert_eq!(buffer[11 * 20 + 9], PAPER);
    }

    #[test]
    fn test_builtin_one_has_stem_not_left_top() {
        let mut buffer = vec![PAPER; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        GlyphSet::builtin().draw_centered(&mut frame, "1", 10.0, 10.0, 10.0, INK);

        assert_eq!(buffer[5 * 20 + 7], PAPER);
        assert_eq!(buffer[5 * 20 + 9], INK);
        assert_eq!(buffer[14 * 20 + 7], INK);
    }

    #[test]
    fn test_builtin_multi_digit_width() {
        let mut buffer = vec![PAPER; 40 * 20];
        let mut frame = Frame::new(&mut buffer, 40, 20);
        // Two 6px glyphs and one 2px gap: 14px wide, starting at 20 - 7
        GlyphSet::builtin().draw_centered(&mut frame, "10", 20.0, 10.0, 10.0, INK);

        let pixels = lit(&buffer, 40);
        assert_eq!(pixels.iter().map(|p| p.0).min(), Some(13));
        assert_eq!(pixels.iter().map(|p| p.0).max(), Some(26));
    }

    #[test]
    fn test_tiny_size_still_draws_one_pixel_dots() {
        let mut buffer = vec![PAPER; 10 * 10];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        GlyphSet::builtin().draw_centered(&mut frame, "7", 5.0, 5.0, 2.0, INK);
        assert!(!lit(&buffer, 10).is_empty());
    }

    #[test]
    fn test_glyphs_respect_clip() {
        let mut buffer = vec![PAPER; 20 * 20];
        let mut frame = Frame::new(&mut buffer, 20, 20);
        frame.set_clip(Rect::new(0.0, 0.0, 10.0, 20.0));
        GlyphSet::builtin().draw_centered(&mut frame, "8", 10.0, 10.0, 10.0, INK);
        assert!(lit(&buffer, 20).iter().all(|&(x, _)| x < 10));
    }

    #[test]
    fn test_glyph_cache_holds_one_size() {
        let mut cache = GlyphCache::new();
        let mut rasterized = 0;
        let mut fetch = |cache: &mut GlyphCache, ch: char, size: f32| {
            cache.get_or_insert_with(ch, size, || {
                rasterized += 1;
                (Metrics::default(), Vec::new())
            });
        };

        fetch(&mut cache, '1', 12.0);
        fetch(&mut cache, '2', 12.0);
        fetch(&mut cache, '1', 12.0);
        assert_eq!(cache.len(), 2);

        // Every zoom level replaces the previous glyphs
        for step in 0..50 {
            fetch(&mut cache, '1', 13.0 + step as f32 * 0.1);
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(rasterized, 52);
    }

    #[test]
    fn test_load_missing_font_fails() {
        let result = GlyphSet::load(Path::new("/definitely/not/a/font.ttf"));
        assert!(result.is_err());
    }
}
