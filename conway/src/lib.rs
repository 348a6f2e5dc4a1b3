// lib.rs - Seeded Conway's Game of Life on a fixed grid with hard edges
//
// initialize() seeds a board, advance() runs generations, render() prints it.

mod engine;
mod error;
mod generator;
mod grid;
mod play;
mod random;
mod render;

pub mod patterns;

pub use engine::{advance, live_neighbors, next_state, step, step_into};
pub use error::{Axis, LifeError};
pub use generator::{initialize, initialize_with};
pub use grid::Grid;
pub use play::{MIN_GRID, PlayParams, play, play_rendered};
pub use random::JavaRandom;
pub use render::{ALIVE_TOKEN, DEAD_TOKEN, parse, render};
