// grid.rs - Grid type for Conway's Game of Life

use serde::{Deserialize, Serialize};

use crate::error::LifeError;

/// Fixed-size board of alive (`true`) and dead (`false`) cells.
///
/// Cells are stored row-major in one buffer. Both dimensions are at least 1
/// and never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

#[derive(Deserialize)]
struct RawGrid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = LifeError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let expected = cell_count(raw.height, raw.width)?;
        if raw.cells.len() != expected {
            return Err(LifeError::Parse {
                line: 1,
                reason: format!(
                    "expected {} cells for a {}x{} grid, found {}",
                    expected,
                    raw.height,
                    raw.width,
                    raw.cells.len()
                ),
            });
        }
        Ok(Self {
            height: raw.height,
            width: raw.width,
            cells: raw.cells,
        })
    }
}

/// Number of cells in a `height x width` board. Zero dimensions and sizes
/// that cannot be addressed as one buffer are rejected.
fn cell_count(height: usize, width: usize) -> Result<usize, LifeError> {
    height
        .checked_mul(width)
        .filter(|&count| count > 0 && count <= isize::MAX as usize)
        .ok_or(LifeError::InvalidDimension { height, width })
}

impl Grid {
    /// All-dead grid of the given size.
    pub fn new(height: usize, width: usize) -> Result<Self, LifeError> {
        let count = cell_count(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![false; count],
        })
    }

    /// Build a grid from explicit rows. Every row must have the same,
    /// non-zero length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, LifeError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Grid::new(rows.len(), width)?;
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LifeError::Parse {
                    line: row_index + 1,
                    reason: format!("row has {} cells, expected {}", row.len(), width),
                });
            }
            grid.row_mut(row_index).copy_from_slice(row);
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell state, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|index| self.cells[index])
    }

    /// Set a cell. Returns `false` and leaves the board untouched when the
    /// position is outside the board.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.index(row, col) {
            Some(index) => {
                self.cells[index] = alive;
                true
            }
            None => false,
        }
    }

    /// Whether `(row, col)` is on the board and alive.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.height == other.height && self.width == other.width
    }

    /// Unchecked read for callers that already hold the bounds invariant.
    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    fn row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = row * self.width;
        &mut self.cells[start..start + self.width]
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }
}
