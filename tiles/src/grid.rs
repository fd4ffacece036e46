//! Rectangular tile grids.

use crate::code::TileCode;
use crate::error::{TilesError, TilesResult};

/// A player start position, in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Start {
    pub x: u32,
    pub y: u32,
}

impl Start {
    /// Creates a start position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A rectangular, non-empty grid of tile codes, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<TileCode>,
}

impl Grid {
    /// Builds a grid from rows, top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`TilesError::EmptyGrid`] if there are no cells and
    /// [`TilesError::RaggedRows`] if row lengths differ.
    pub fn from_rows(rows: Vec<Vec<TileCode>>) -> TilesResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(TilesError::EmptyGrid);
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TilesError::RaggedRows {
                    row: y,
                    len: row.len(),
                    width,
                });
            }
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            width: width as u32,
            height: height as u32,
            cells,
        })
    }

    /// Builds a grid from a flat row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TilesError::EmptyGrid`] if either dimension is zero and
    /// [`TilesError::CellCountMismatch`] if `cells.len() != width * height`.
    pub fn from_flat(width: u32, height: u32, cells: Vec<TileCode>) -> TilesResult<Self> {
        if width == 0 || height == 0 {
            return Err(TilesError::EmptyGrid);
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(TilesError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count (`width * height`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<TileCode> {
        if x < self.width && y < self.height {
            Some(self.cells[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Returns `true` if `(x, y)` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, start: Start) -> bool {
        start.x < self.width && start.y < self.height
    }

    /// The flat row-major cell buffer.
    #[must_use]
    pub fn flatten(&self) -> &[TileCode] {
        &self.cells
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileCode]> {
        self.cells.chunks(self.width as usize)
    }
}
