// engine.rs - Conway's transition rule over a bounded (non-wrapping) grid

use crate::grid::{Cell, CellCoord, Grid};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live cells in the Moore neighbourhood; positions off the grid count as dead.
pub fn live_neighbors(grid: &Grid, coord: CellCoord) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (Some(row), Some(col)) = (
            coord.row.checked_add_signed(dr),
            coord.col.checked_add_signed(dc),
        ) else {
            continue;
        };
        if grid.is_alive(CellCoord::new(row, col)) {
            count += 1;
        }
    }
    count
}

/// B3/S23.
pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Death or stays dead
    }
}

/// Computes the following generation into a fresh grid.
///
/// The input is only read, so every cell sees the same generation's
/// neighbours. Runs in O(rows × cols).
pub fn next_generation(grid: &Grid) -> Grid {
    Grid::from_fn(grid.rows(), grid.cols(), |coord| {
        let cell = grid.get(coord).unwrap_or_default();
        next_state(cell, live_neighbors(grid, coord))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    /// 3x3 grid with `centre` in the middle and the first `n` neighbours alive.
    fn centred(centre: Cell, n: usize) -> Grid {
        let mut g = Grid::square(3);
        g.set(CellCoord::new(1, 1), centre);
        for &(dr, dc) in NEIGHBOR_OFFSETS.iter().take(n) {
            g.set(CellCoord::new((1 + dr) as usize, (1 + dc) as usize), Cell::Alive);
        }
        g
    }

    #[test]
    fn rule_table_covers_every_neighbour_count() {
        let centre = CellCoord::new(1, 1);
        for n in 0..=8 {
            let alive = next_generation(&centred(Cell::Alive, n)).get(centre);
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(alive, Some(expected), "live cell with {n} neighbours");

            let dead = next_generation(&centred(Cell::Dead, n)).get(centre);
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(dead, Some(expected), "dead cell with {n} neighbours");
        }
    }

    #[test]
    fn corner_sees_at_most_three_neighbours() {
        let full = Grid::from_fn(4, 4, |_| Cell::Alive);
        assert_eq!(live_neighbors(&full, CellCoord::new(0, 0)), 3);
        assert_eq!(live_neighbors(&full, CellCoord::new(3, 3)), 3);
        assert_eq!(live_neighbors(&full, CellCoord::new(0, 2)), 5);
        assert_eq!(live_neighbors(&full, CellCoord::new(1, 1)), 8);
    }

    #[test]
    fn vertical_blinker_oscillates() {
        let vertical = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let horizontal = grid(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);

        let once = next_generation(&vertical);
        assert_eq!(once, horizontal);
        assert_eq!(next_generation(&once), vertical);
    }

    #[test]
    fn empty_grid_stays_empty() {
        let empty = Grid::square(5);
        let next = next_generation(&empty);
        assert_eq!(next, empty);
        assert_eq!((next.rows(), next.cols()), (5, 5));
    }

    #[test]
    fn block_is_still_life() {
        let block = grid(&[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]]);
        assert_eq!(next_generation(&block), block);
    }

    #[test]
    fn input_is_left_untouched() {
        let vertical = grid(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
        let copy = vertical.clone();
        let _ = next_generation(&vertical);
        assert_eq!(vertical, copy);
    }
}
