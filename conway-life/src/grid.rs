use crate::cell::Cell;
use crate::error::{GridError, ParseGridError};
use std::fmt;
use std::slice::Iter;
use std::str::FromStr;
use world_grid::{Loc, WorldGrid};

/// An N×N generation of cells. Its size is fixed at creation; stepping
/// produces a new `Grid` rather than changing this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: WorldGrid<Cell>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidDimension { grid_size: size });
        }
        Ok(Self {
            cells: WorldGrid::new(size),
        })
    }

    pub fn with_alive_cells<I>(size: usize, alive_cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut result = Self::new(size)?;
        for (row, col) in alive_cells {
            let cell = result
                .cells
                .get_mut(Loc::new(row, col))
                .ok_or(GridError::CellOutOfBounds {
                    grid_size: size,
                    row,
                    col,
                })?;
            *cell = Cell::Alive;
        }
        Ok(result)
    }

    pub(crate) fn from_cells(cells: WorldGrid<Cell>) -> Self {
        Self { cells }
    }

    pub(crate) fn cells(&self) -> &WorldGrid<Cell> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut WorldGrid<Cell> {
        &mut self.cells
    }

    pub fn size(&self) -> usize {
        self.cells.size()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.num_cells()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(Loc::new(row, col)).copied()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_alive)
    }

    pub fn population(&self) -> usize {
        self.cells.cells_iter().filter(|cell| cell.is_alive()).count()
    }

    /// Cells in row-major order.
    pub fn cells_iter(&self) -> Iter<'_, Cell> {
        self.cells.cells_iter()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.rows_iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            let line: String = row.iter().map(|cell| cell.as_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses the `Display` form. Blank lines and indentation are ignored, so
    /// grids can be written as indented string literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let size = lines.len();
        if size == 0 {
            return Err(ParseGridError::Empty);
        }

        let mut cells = WorldGrid::new(size);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(ParseGridError::NotSquare {
                    row,
                    len,
                    expected: size,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell =
                    Cell::from_char(ch).ok_or(ParseGridError::InvalidChar { row, col, found: ch })?;
                cells[Loc::new(row, col)] = cell;
            }
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_dead() {
        let grid = Grid::new(6).unwrap();
        assert_eq!(grid.size(), 6);
        assert_eq!(grid.num_cells(), 36);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_size_is_invalid() {
        assert_eq!(
            Grid::new(0),
            Err(GridError::InvalidDimension { grid_size: 0 })
        );
    }

    #[test]
    fn test_with_alive_cells() {
        let grid = Grid::with_alive_cells(4, [(0, 1), (3, 3)]).unwrap();
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(3, 3));
        assert!(!grid.is_alive(1, 0));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_with_alive_cells_out_of_bounds() {
        assert_eq!(
            Grid::with_alive_cells(4, [(1, 4)]),
            Err(GridError::CellOutOfBounds {
                grid_size: 4,
                row: 1,
                col: 4,
            })
        );
        let err = Grid::with_alive_cells(4, [(0, 0), (7, 2)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cell at row 7, column 2 is outside a 4x4 grid"
        );
    }

    #[test]
    fn test_cell_lookup_outside_grid() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.cell(2, 2), Some(Cell::Dead));
        assert_eq!(grid.cell(3, 0), None);
        assert!(!grid.is_alive(0, 3));
    }

    #[test]
    fn test_text_form() {
        let text = "
            .o.
            ..o
            ooo
        ";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.population(), 5);
        assert!(grid.is_alive(0, 1));
        assert!(!grid.is_alive(0, 0));
        assert_eq!(grid.to_string(), ".o.\n..o\nooo\n");
        assert_eq!(grid.to_string().parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn test_text_form_errors() {
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "..\n...".parse::<Grid>(),
            Err(ParseGridError::NotSquare {
                row: 1,
                len: 3,
                expected: 2,
            })
        );
        assert_eq!(
            "..\n.x".parse::<Grid>(),
            Err(ParseGridError::InvalidChar {
                row: 1,
                col: 1,
                found: 'x',
            })
        );
    }

    #[test]
    fn test_cells_iter_is_row_major() {
        let grid: Grid = "..\n.o".parse().unwrap();
        let cells: Vec<Cell> = grid.cells_iter().copied().collect();
        assert_eq!(cells, vec![Cell::Dead, Cell::Dead, Cell::Dead, Cell::Alive]);
    }
}
