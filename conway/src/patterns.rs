// patterns.rs - Well-known starting shapes that can be stamped onto a board

use crate::error::LifeError;
use crate::grid::Grid;

/// Live cells of a shape as (row, col) offsets from its top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Rows spanned by the pattern's bounding box.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    /// Columns spanned by the pattern's bounding box.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Set the pattern's cells alive with its top-left corner at
    /// `(row, col)`. Cells already alive stay alive. Nothing is written if
    /// the bounding box would leave the board.
    pub fn place(&self, grid: &mut Grid, row: usize, col: usize) -> Result<(), LifeError> {
        let fits = |start: usize, span: usize, limit: usize| {
            start.checked_add(span).is_some_and(|end| end <= limit)
        };
        if !fits(row, self.height(), grid.height()) || !fits(col, self.width(), grid.width()) {
            return Err(LifeError::PatternOutOfBounds {
                name: self.name,
                row,
                col,
            });
        }
        for &(d_row, d_col) in self.cells {
            grid.set(row + d_row, col + d_col, true);
        }
        Ok(())
    }

    /// Place the pattern in the middle of the board.
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), LifeError> {
        let row = grid.height().saturating_sub(self.height()) / 2;
        let col = grid.width().saturating_sub(self.width()) / 2;
        self.place(grid, row, col)
    }
}
