// play.rs - One simulation request: validate, seed, run, render

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::advance;
use crate::error::{Axis, LifeError};
use crate::generator::initialize;
use crate::grid::Grid;

/// Smallest playable board edge.
pub const MIN_GRID: usize = 3;

/// Parameters of a single simulation run.
///
/// Fields are signed so out-of-range input reaches [`PlayParams::validate`]
/// instead of failing earlier during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayParams {
    pub height: i64,
    pub width: i64,
    pub seed: i64,
    /// Generations to run; zero or negative runs none.
    pub iterations: i64,
}

impl Default for PlayParams {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
            seed: 0,
            iterations: 10,
        }
    }
}

impl PlayParams {
    /// Check the board is at least [`MIN_GRID`] on both axes, height first,
    /// and return the dimensions as `(height, width)`.
    pub fn validate(&self) -> Result<(usize, usize), LifeError> {
        let height = checked_edge(self.height, Axis::Height)?;
        let width = checked_edge(self.width, Axis::Width)?;
        Ok((height, width))
    }
}

fn checked_edge(value: i64, axis: Axis) -> Result<usize, LifeError> {
    usize::try_from(value)
        .ok()
        .filter(|&edge| edge >= MIN_GRID)
        .ok_or(LifeError::BoardTooSmall {
            axis,
            min: MIN_GRID,
        })
}

/// Validate, seed and advance a board.
pub fn play(params: &PlayParams) -> Result<Grid, LifeError> {
    let (height, width) = params.validate()?;
    let start = initialize(height, width, params.seed)?;
    let end = advance(start, params.iterations);
    info!(
        height,
        width,
        seed = params.seed,
        iterations = params.iterations,
        live = end.live_count(),
        "played board"
    );
    Ok(end)
}

/// [`play`], then render the final board as text.
pub fn play_rendered(params: &PlayParams) -> Result<String, LifeError> {
    play(params).map(|grid| grid.to_string())
}
