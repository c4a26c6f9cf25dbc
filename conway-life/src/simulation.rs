use crate::cell::Cell;
use crate::config::SimulationConfig;
use crate::error::GridError;
use crate::grid::Grid;
use crate::initializer::{initialize, initialize_with};
use crate::stepper::step;
use log::{info, trace};
use std::slice::Iter;
use std::thread;
use world_grid::{Random, World};

/// Receives every generation a [`Simulation`] produces.
pub trait Renderer {
    fn render(&mut self, generation: u32, grid: &Grid);
}

impl<F> Renderer for F
where
    F: FnMut(u32, &Grid),
{
    fn render(&mut self, generation: u32, grid: &Grid) {
        self(generation, grid)
    }
}

/// Owns the current generation and replaces it with the next one on each
/// tick, up to `config.generations` ticks.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    generation: u32,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, GridError> {
        let grid = initialize(config.grid_size, config.randomize)?;
        Ok(Self::start(config, grid))
    }

    pub fn with_random(config: SimulationConfig, rand: &mut Random) -> Result<Self, GridError> {
        let grid = initialize_with(config.grid_size, config.randomize, rand)?;
        Ok(Self::start(config, grid))
    }

    fn start(config: SimulationConfig, grid: Grid) -> Self {
        info!(
            "Starting {size}x{size} simulation for {} generations, {} live cells",
            config.generations,
            grid.population(),
            size = config.grid_size,
        );
        Self {
            config,
            grid,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.generations
    }

    /// Steps to the next generation. Returns false, leaving the grid alone,
    /// once the configured number of generations has been reached.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.grid = step(&self.grid);
        self.generation += 1;
        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.grid.population()
        );
        if self.is_finished() {
            info!("Finished after {} generations", self.generation);
        }
        true
    }

    /// Renders the current generation, then advances and renders once per
    /// interval until finished.
    pub fn run<R>(&mut self, renderer: &mut R)
    where
        R: Renderer,
    {
        renderer.render(self.generation, &self.grid);
        while !self.is_finished() {
            thread::sleep(self.config.interval());
            self.advance();
            renderer.render(self.generation, &self.grid);
        }
    }
}

impl World for Simulation {
    type Cell = Cell;

    fn width(&self) -> usize {
        self.grid.size()
    }

    fn height(&self) -> usize {
        self.grid.size()
    }

    fn num_cells(&self) -> usize {
        self.grid.num_cells()
    }

    fn cells_iter(&self) -> Iter<'_, Cell> {
        self.grid.cells_iter()
    }

    fn update(&mut self) {
        self.advance();
    }

    fn is_finished(&self) -> bool {
        Simulation::is_finished(self)
    }
}
