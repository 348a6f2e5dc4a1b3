// engine.rs - Conway generation step over a hard-edged grid

use tracing::{debug, debug_span};

use crate::grid::Grid;

/// The eight neighbor offsets as (row, col) deltas.
#[rustfmt::skip]
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count live cells around `(row, col)`.
///
/// Offsets that fall off the board are skipped, never wrapped, so a corner
/// sees at most 3 neighbors and an edge cell at most 5.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(d_row, d_col) in &NEIGHBORS {
        let (Some(n_row), Some(n_col)) =
            (row.checked_add_signed(d_row), col.checked_add_signed(d_col))
        else {
            continue;
        };
        if n_row < grid.height() && n_col < grid.width() && grid.cell(n_row, n_col) {
            count += 1;
        }
    }
    count
}

/// B3/S23: survive on 2 or 3 neighbors, birth on exactly 3.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the generation after `current` into a fresh grid.
pub fn step(current: &Grid) -> Grid {
    let mut next = current.clone();
    step_into(current, &mut next);
    next
}

/// Compute the generation after `current` into `next`, overwriting every
/// cell. Both grids must have the same shape.
pub fn step_into(current: &Grid, next: &mut Grid) {
    assert!(
        current.same_shape(next),
        "step buffers differ in shape: {}x{} vs {}x{}",
        current.height(),
        current.width(),
        next.height(),
        next.width()
    );
    let width = current.width();
    for (index, cell) in next.cells_mut().iter_mut().enumerate() {
        let (row, col) = (index / width, index % width);
        *cell = next_state(current.cell(row, col), live_neighbors(current, row, col));
    }
}

/// Run `iterations` generations. Zero or negative counts return `grid`
/// unchanged.
///
/// Two buffers are swapped each generation so every step reads a complete
/// snapshot of the one before. A board that stops changing is returned as
/// soon as it is reached, since every later generation equals it.
pub fn advance(grid: Grid, iterations: i64) -> Grid {
    if iterations < 1 {
        return grid;
    }
    let _span = debug_span!(
        "advance",
        height = grid.height(),
        width = grid.width(),
        iterations
    )
    .entered();

    let mut current = grid;
    let mut next = current.clone();
    for generation in 1..=iterations {
        step_into(&current, &mut next);
        std::mem::swap(&mut current, &mut next);
        if current == next {
            debug!(generation, live = current.live_count(), "board settled");
            return current;
        }
    }
    debug!(live = current.live_count(), "generations complete");
    current
}
