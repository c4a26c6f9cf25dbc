use world_grid::{GridCell, Neighborhood};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const ALIVE_CHAR: char = 'o';
    pub const DEAD_CHAR: char = '.';

    pub fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::ALIVE_CHAR => Some(Cell::Alive),
            Self::DEAD_CHAR => Some(Cell::Dead),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Alive => Self::ALIVE_CHAR,
            Cell::Dead => Self::DEAD_CHAR,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Birth on exactly three live neighbors, survival on two or three.
    pub fn next_state(self, live_neighbors: usize) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    fn num_live_neighbors(neighborhood: &Neighborhood<Cell>) -> usize {
        neighborhood.count_neighbors(|neighbor| neighbor.is_alive())
    }
}

impl GridCell for Cell {
    fn color_rgba(&self) -> [u8; 4] {
        match self {
            Cell::Alive => [0xff, 0xff, 0xff, 0xff],
            Cell::Dead => [0x00, 0x00, 0x00, 0xff],
        }
    }

    fn next(&self, neighborhood: &Neighborhood<Cell>) -> Self {
        self.next_state(Self::num_live_neighbors(neighborhood))
    }
}
