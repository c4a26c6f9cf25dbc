#![deny(clippy::all)]
#![forbid(unsafe_code)]

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

/// What a renderer needs from a simulation: its shape, its cells in row-major
/// order, and a way to advance it by one time step.
pub trait World {
    type Cell: GridCell;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn num_cells(&self) -> usize;
    fn cells_iter(&self) -> Iter<'_, Self::Cell>;
    fn update(&mut self);

    fn is_finished(&self) -> bool {
        false
    }
}

pub trait GridCell
where
    Self: Copy + Default + Send + Sync,
{
    fn color_rgba(&self) -> [u8; 4];
    fn next(&self, neighborhood: &Neighborhood<Self>) -> Self;
}

/// A square grid whose opposite edges are joined, so every cell has exactly
/// eight neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldGrid<C>
where
    C: GridCell,
{
    cells: Vec<C>,
    size: usize,
}

impl<C> WorldGrid<C>
where
    C: GridCell,
{
    pub fn new(size: usize) -> Self {
        assert!(size != 0);
        Self {
            cells: vec![C::default(); size * size],
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> Iter<'_, C> {
        self.cells.iter()
    }

    pub fn cells_iter_mut(&mut self) -> impl Iterator<Item = &mut C> {
        self.cells.iter_mut()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[C]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn get(&self, loc: Loc) -> Option<&C> {
        loc.grid_index(self.size).map(|index| &self.cells[index])
    }

    pub fn get_mut(&mut self, loc: Loc) -> Option<&mut C> {
        loc.grid_index(self.size).map(|index| &mut self.cells[index])
    }

    /// Builds the following generation from this one. Every cell sees only
    /// this generation's neighbors, never cells already updated in the new
    /// grid.
    pub fn next_generation(&self) -> Self {
        let mut next_cells = vec![C::default(); self.cells.len()];
        next_cells
            .par_chunks_mut(self.size)
            .enumerate()
            .for_each(|(row, next_row)| self.update_row(row, next_row));
        Self {
            cells: next_cells,
            size: self.size,
        }
    }

    fn update_row(&self, row: usize, next_row: &mut [C]) {
        for (col, next_cell) in next_row.iter_mut().enumerate() {
            let loc = Loc::new(row, col);
            let neighborhood = Neighborhood::new(self, loc);
            *next_cell = self[loc].next(&neighborhood);
        }
    }
}

impl<C> Index<Loc> for WorldGrid<C>
where
    C: GridCell,
{
    type Output = C;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.get(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl<C> IndexMut<Loc> for WorldGrid<C>
where
    C: GridCell,
{
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.get_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

pub struct Neighborhood<'a, C>
where
    C: GridCell,
{
    cells: &'a WorldGrid<C>,
    rows: [usize; 3],
    cols: [usize; 3],
}

impl<'a, C> Neighborhood<'a, C>
where
    C: GridCell,
{
    pub fn new(cells: &'a WorldGrid<C>, center: Loc) -> Self {
        let (row_above, row_below) = Self::adjacent_indexes(center.row, cells.size());
        let (col_left, col_right) = Self::adjacent_indexes(center.col, cells.size());
        Self {
            cells,
            rows: [row_above, center.row, row_below],
            cols: [col_left, center.col, col_right],
        }
    }

    /// Cell at `row`, `col` of the 3x3 neighborhood, where (1, 1) is the center.
    pub fn cell(&self, row: usize, col: usize) -> &C {
        let grid_index = Loc::new(self.rows[row], self.cols[col]);
        &self.cells[grid_index]
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(&C),
    {
        self.for_cell(0, 0, &mut f);
        self.for_cell(0, 1, &mut f);
        self.for_cell(0, 2, &mut f);

        self.for_cell(1, 0, &mut f);
        self.for_cell(1, 2, &mut f);

        self.for_cell(2, 0, &mut f);
        self.for_cell(2, 1, &mut f);
        self.for_cell(2, 2, &mut f);
    }

    pub fn count_neighbors<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&C) -> bool,
    {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if predicate(neighbor) {
                result += 1;
            }
        });
        result
    }

    fn for_cell<F>(&self, row: usize, col: usize, f: &mut F)
    where
        F: FnMut(&C),
    {
        f(self.cell(row, col));
    }

    // On a 1-wide axis both neighbors wrap onto the center itself.
    fn adjacent_indexes(cell_index: usize, max: usize) -> (usize, usize) {
        (
            Self::modulo(cell_index as i64 - 1, max),
            Self::modulo(cell_index as i64 + 1, max),
        )
    }

    fn modulo(val: i64, max: usize) -> usize {
        val.rem_euclid(max as i64) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: usize,
    pub col: usize,
}

impl Loc {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, size: usize) -> Option<usize> {
        if self.row < size && self.col < size {
            Some(self.row * size + self.col)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
