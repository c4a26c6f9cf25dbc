#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a square toroidal grid.
//!
//! [`initialize`] builds the first generation, either randomly or by centering
//! [`GOSPER_GLIDER_GUN`] in an empty grid, and [`step`] computes each following
//! generation. [`Simulation`] threads a grid through `step` for a configured
//! number of generations and hands every snapshot to a [`Renderer`].

mod cell;
mod config;
mod error;
mod grid;
mod initializer;
mod pattern;
mod simulation;
mod stepper;

pub use cell::Cell;
pub use config::SimulationConfig;
pub use error::{ConfigError, GridError, ParseGridError};
pub use grid::Grid;
pub use initializer::{initialize, initialize_with, random_grid, seeded_grid};
pub use pattern::{Pattern, GOSPER_GLIDER_GUN};
pub use simulation::{Renderer, Simulation};
pub use stepper::step;
pub use world_grid::Random;
