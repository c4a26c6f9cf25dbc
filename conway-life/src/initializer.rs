use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::Grid;
use crate::pattern::{Pattern, GOSPER_GLIDER_GUN};
use log::debug;
use world_grid::{Loc, Random};

const ALIVE_PROBABILITY: f64 = 0.5;

/// First generation of a `grid_size` grid: random cells if `randomize` is
/// set, otherwise [`GOSPER_GLIDER_GUN`] centered in an empty grid.
pub fn initialize(grid_size: usize, randomize: bool) -> Result<Grid, GridError> {
    if randomize {
        random_grid(grid_size, &mut Random::new())
    } else {
        seeded_grid(grid_size, &GOSPER_GLIDER_GUN)
    }
}

/// Like [`initialize`], drawing random cells from `rand`.
pub fn initialize_with(
    grid_size: usize,
    randomize: bool,
    rand: &mut Random,
) -> Result<Grid, GridError> {
    if randomize {
        random_grid(grid_size, rand)
    } else {
        seeded_grid(grid_size, &GOSPER_GLIDER_GUN)
    }
}

/// Each cell is alive with probability 1/2, independently of the others.
pub fn random_grid(grid_size: usize, rand: &mut Random) -> Result<Grid, GridError> {
    let mut result = Grid::new(grid_size)?;
    for cell in result.cells_mut().cells_iter_mut() {
        *cell = Cell::from_alive(rand.next_bool(ALIVE_PROBABILITY));
    }
    debug!(
        "Random {grid_size}x{grid_size} grid with {} live cells",
        result.population()
    );
    Ok(result)
}

pub fn seeded_grid(grid_size: usize, pattern: &Pattern) -> Result<Grid, GridError> {
    let mut result = Grid::new(grid_size)?;
    let offset = pattern
        .centered_offset(grid_size)
        .ok_or(GridError::OutOfBounds {
            grid_size,
            rows: pattern.rows(),
            cols: pattern.cols(),
        })?;
    debug!(
        "Placing {}x{} pattern at row {}, column {}",
        pattern.rows(),
        pattern.cols(),
        offset.row,
        offset.col
    );

    let cells = result.cells_mut();
    for loc in pattern.alive_cells() {
        cells[Loc::new(offset.row + loc.row, offset.col + loc.col)] = Cell::Alive;
    }
    Ok(result)
}
