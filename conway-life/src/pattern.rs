use crate::cell::Cell;
use world_grid::Loc;

/// A fixed arrangement of cells, written one string per row with
/// [`Cell::ALIVE_CHAR`] for live cells and [`Cell::DEAD_CHAR`] for dead ones.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    rows: &'static [&'static str],
}

impl Pattern {
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn fits_in(&self, grid_size: usize) -> bool {
        self.rows() <= grid_size && self.cols() <= grid_size
    }

    /// Offset that centers the pattern in a grid of `grid_size`, rounding
    /// toward the top left. `None` if the pattern does not fit.
    pub fn centered_offset(&self, grid_size: usize) -> Option<Loc> {
        if !self.fits_in(grid_size) {
            return None;
        }
        Some(Loc::new(
            (grid_size - self.rows()) / 2,
            (grid_size - self.cols()) / 2,
        ))
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = Loc> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| Cell::from_char(ch) == Some(Cell::Alive))
                .map(move |(col, _)| Loc::new(row, col))
        })
    }
}

pub const GOSPER_GLIDER_GUN: Pattern = Pattern::new(&[
    ".....................................",
    ".........................o...........",
    ".......................o.o...........",
    ".............oo......oo............oo",
    "............o...o....oo............oo",
    ".oo........o.....o...oo..............",
    ".oo........o...o.oo....o.o...........",
    "...........o.....o.......o...........",
    "............o...o....................",
    ".............oo......................",
    ".....................................",
]);
