use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board axis named by a size validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Height,
    Width,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Height => f.write_str("Height"),
            Axis::Width => f.write_str("Width"),
        }
    }
}

/// Errors raised while building, parsing or validating boards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid was requested with a zero dimension.
    #[error("invalid grid dimensions {height}x{width}: both must be at least 1")]
    InvalidDimension { height: usize, width: usize },
    /// A play request asked for a board below the playable minimum.
    #[error("{axis} of board can't be less than {min}")]
    BoardTooSmall { axis: Axis, min: usize },
    /// Rendered board text could not be read back.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    /// A pattern does not fit on the grid at the requested origin.
    #[error("pattern {name} does not fit at ({row}, {col})")]
    PatternOutOfBounds {
        name: &'static str,
        row: usize,
        col: usize,
    },
}
