// generator.rs - Seeded starting boards

use rand::RngCore;
use tracing::debug;

use crate::error::LifeError;
use crate::grid::Grid;
use crate::random::JavaRandom;

/// Build a `height x width` board from `seed`.
///
/// Cells are filled in row-major order, one `JavaRandom::next_bool` per
/// cell, so the same arguments always give the same board.
pub fn initialize(height: usize, width: usize, seed: i64) -> Result<Grid, LifeError> {
    let grid = initialize_with(height, width, &mut JavaRandom::new(seed))?;
    debug!(height, width, seed, live = grid.live_count(), "seeded board");
    Ok(grid)
}

/// Fill a board from any bit source, taking the top bit of each
/// `next_u32` as the cell state.
pub fn initialize_with<R: RngCore + ?Sized>(
    height: usize,
    width: usize,
    rng: &mut R,
) -> Result<Grid, LifeError> {
    let mut grid = Grid::new(height, width)?;
    for cell in grid.cells_mut() {
        *cell = rng.next_u32() >> 31 == 1;
    }
    Ok(grid)
}
