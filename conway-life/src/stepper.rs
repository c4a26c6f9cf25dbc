use crate::grid::Grid;

/// The next generation of `grid`. Neighbors wrap around the edges, and every
/// cell is updated from `grid` as it was before the step.
pub fn step(grid: &Grid) -> Grid {
    Grid::from_cells(grid.cells().next_generation())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn test_shape_is_preserved() {
        for size in [1, 2, 3, 8, 17] {
            let grid = Grid::with_alive_cells(size, [(0, 0)]).unwrap();
            let next = step(&grid);
            assert_eq!(next.size(), size);
            assert_eq!(next.num_cells(), size * size);
        }
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        for size in [1, 2, 5, 30] {
            let grid = Grid::new(size).unwrap();
            assert_eq!(step(&grid), grid);
        }
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = Grid::with_alive_cells(7, [(3, 3)]).unwrap();
        assert_eq!(step(&grid).population(), 0);
    }

    #[test]
    fn test_input_is_unchanged() {
        let grid = parse(
            "
            .....
            ..o..
            ..o..
            ..o..
            .....
        ",
        );
        let before = grid.clone();
        let _next = step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_block_is_still() {
        let grid = parse(
            "
            ......
            ......
            ..oo..
            ..oo..
            ......
            ......
        ",
        );
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_blinker_has_period_two() {
        let horizontal = parse(
            "
            .....
            .....
            .ooo.
            .....
            .....
        ",
        );
        let vertical = parse(
            "
            .....
            ..o..
            ..o..
            ..o..
            .....
        ",
        );
        let once = step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(step(&once), horizontal);
    }

    #[test]
    fn test_wrapped_corners_are_neighbors() {
        // (0, 0) only sees these three through the wrapped edges.
        let grid = Grid::with_alive_cells(6, [(5, 5), (5, 0), (0, 5)]).unwrap();
        let next = step(&grid);
        assert!(next.is_alive(0, 0));
        assert!(next.is_alive(5, 5));
        assert!(next.is_alive(5, 0));
        assert!(next.is_alive(0, 5));
        assert_eq!(next.population(), 4);
        assert_eq!(step(&next), next);
    }

    #[test]
    fn test_blinker_across_edge() {
        let horizontal = parse(
            "
            .....
            .....
            oo..o
            .....
            .....
        ",
        );
        let vertical = parse(
            "
            .....
            o....
            o....
            o....
            .....
        ",
        );
        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn test_single_cell_grid_neighbors_itself() {
        // All eight neighbors are the cell itself: eight live neighbors when
        // alive, none when dead.
        let alive = parse("o");
        assert_eq!(step(&alive), parse("."));
        let dead = parse(".");
        assert_eq!(step(&dead), dead);
    }

    #[test]
    fn test_two_by_two_grid_aliases_neighbors() {
        // On a 2x2 torus a live cell never neighbors itself, and the others
        // see it twice (same row or column) or four times (diagonal).
        let grid = parse("o.\n..");
        assert_eq!(step(&grid).population(), 0);
    }

    #[test]
    fn test_glider_returns_after_full_lap() {
        let glider = parse(
            "
            .o......
            ..o.....
            ooo.....
            ........
            ........
            ........
            ........
            ........
        ",
        );
        // A glider moves one cell diagonally every four generations, so on an
        // 8x8 torus it is back where it started after 32.
        let mut grid = glider.clone();
        for _ in 0..32 {
            grid = step(&grid);
            assert_eq!(grid.population(), 5);
        }
        assert_eq!(grid, glider);
    }
}
