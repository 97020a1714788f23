//! The puzzle grid
//!
//! A rectangular array of cells fixed at construction. Only the painted flag
//! of each cell changes afterwards.

use thiserror::Error;

/// Errors from building a grid out of rows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    color_index: usize,
    /// Whether the cell has been painted (shows its real color)
    pub is_colored: bool,
}

impl Cell {
    pub const fn new(color_index: usize, is_colored: bool) -> Self {
        Self {
            color_index,
            is_colored,
        }
    }

    /// Palette slot this cell refers to (not validated against any palette)
    #[inline]
    pub fn color_index(&self) -> usize {
        self.color_index
    }
}

/// Row-major rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Build from rows; every row must have the same length and there must
    /// be at least one row
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let columns = rows.first().map(Vec::len).ok_or(GridError::Empty)?;

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(GridError::Ragged {
                row,
                expected: columns,
                found,
            });
        }

        let row_count = rows.len();
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            rows: row_count,
            columns,
        })
    }

    #[inline]
    fn index_of(&self, row: i64, column: i64) -> Option<usize> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Cell at (row, column), or `None` outside the grid
    pub fn cell_at(&self, row: i64, column: i64) -> Option<&Cell> {
        self.index_of(row, column).map(|i| &self.cells[i])
    }

    pub fn cell_at_mut(&mut self, row: i64, column: i64) -> Option<&mut Cell> {
        self.index_of(row, column).map(|i| &mut self.cells[i])
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn set_all_colored(&mut self, colored: bool) {
        for cell in &mut self.cells {
            cell.is_colored = colored;
        }
    }

    /// True when every cell is painted
    pub fn all_colored(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_colored)
    }

    /// Iterate `(row, column, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / columns, i % columns, cell))
    }
}
