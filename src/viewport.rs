//! Viewport over the grid plane
//!
//! The grid lives on an infinite pixel plane where cell (row, column) covers
//! `[column * scale, (column + 1) * scale) x [row * scale, (row + 1) * scale)`.
//! The view's offset is the plane position of the surface's top-left corner.

/// Multiplicative zoom step for one wheel notch
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.1;

/// A grid coordinate; may lie outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: i64,
    pub column: i64,
}

impl GridPos {
    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }
}

/// Inclusive range of rows and columns touched by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub start_row: i64,
    pub end_row: i64,
    pub start_column: i64,
    pub end_column: i64,
}

impl VisibleRange {
    /// Iterate every position in the range, row-major
    pub fn positions(&self) -> impl Iterator<Item = GridPos> {
        let (start_column, end_column) = (self.start_column, self.end_column);
        (self.start_row..=self.end_row).flat_map(move |row| {
            (start_column..=end_column).map(move |column| GridPos::new(row, column))
        })
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        (self.start_row..=self.end_row).contains(&pos.row)
            && (self.start_column..=self.end_column).contains(&pos.column)
    }

    /// The part of the range inside a `rows x columns` grid, if any
    pub fn clamped_to(&self, rows: usize, columns: usize) -> Option<VisibleRange> {
        let clamped = VisibleRange {
            start_row: self.start_row.max(0),
            end_row: self.end_row.min(rows as i64 - 1),
            start_column: self.start_column.max(0),
            end_column: self.end_column.min(columns as i64 - 1),
        };
        (clamped.start_row <= clamped.end_row && clamped.start_column <= clamped.end_column)
            .then_some(clamped)
    }
}

/// Pan offset and cell size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Pixel size of one cell, always > 0
    pub scale: f64,
}

impl Default for View {
    fn default() -> Self {
        Self::new(0.0, 0.0, 20.0)
    }
}

impl View {
    pub const fn new(offset_x: f64, offset_y: f64, scale: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            scale,
        }
    }

    /// Grid position under a surface pixel
    pub fn screen_to_grid(&self, x: f64, y: f64) -> GridPos {
        GridPos::new(
            ((y + self.offset_y) / self.scale).floor() as i64,
            ((x + self.offset_x) / self.scale).floor() as i64,
        )
    }

    /// Surface position of a cell's top-left corner
    pub fn grid_to_screen(&self, row: i64, column: i64) -> (f64, f64) {
        (
            column as f64 * self.scale - self.offset_x,
            row as f64 * self.scale - self.offset_y,
        )
    }

    /// Cells touched by a `width x height` surface
    ///
    /// Both ends are inclusive, so partially visible cells at every edge are
    /// covered (the far end may overshoot by one cell).
    pub fn visible_range(&self, width: u32, height: u32) -> VisibleRange {
        VisibleRange {
            start_row: (self.offset_y / self.scale).floor() as i64,
            end_row: ((self.offset_y + height as f64) / self.scale).floor() as i64,
            start_column: (self.offset_x / self.scale).floor() as i64,
            end_column: ((self.offset_x + width as f64) / self.scale).floor() as i64,
        }
    }

    /// Drag the content by a screen-space delta
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x -= dx;
        self.offset_y -= dy;
    }

    /// Multiply the scale by `factor`, keeping `(center_x, center_y)` fixed
    pub fn zoom(&mut self, factor: f64, center_x: f64, center_y: f64) {
        self.scale *= factor;
        self.offset_x = self.offset_x * factor + center_x * (factor - 1.0);
        self.offset_y = self.offset_y * factor + center_y * (factor - 1.0);
    }

    /// Zoom one notch around the center of a `width x height` surface
    ///
    /// Negative wheel deltas zoom in; everything else zooms out.
    pub fn zoom_notch(&mut self, delta_y: f64, zoom_factor: f64, width: u32, height: u32) {
        self.zoom(
            notch_factor(delta_y, zoom_factor),
            width as f64 / 2.0,
            height as f64 / 2.0,
        );
    }
}

/// Multiplicative adjustment for one wheel event
pub fn notch_factor(delta_y: f64, zoom_factor: f64) -> f64 {
    if delta_y < 0.0 {
        zoom_factor
    } else {
        zoom_factor.recip()
    }
}
