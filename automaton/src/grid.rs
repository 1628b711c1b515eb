// grid.rs - Grid types for Conway's Game of Life

use rand::Rng;

use crate::error::GridError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// A (row, col) position, 0-indexed. May lie outside any particular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Fixed-size rows × cols board, stored row-major.
///
/// The dimensions never change once built; a resize means building a new grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    pub fn square(dimension: usize) -> Self {
        Self::new(dimension, dimension)
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(CellCoord) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(CellCoord::new(row, col)));
            }
        }
        Self { rows, cols, cells }
    }

    /// Build from rows of 0/1 values (any non-zero byte is alive).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| Cell::from(v != 0)));
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Each cell is alive with probability `alive_probability`, clamped to
    /// [0, 1]; NaN seeds an empty grid.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Self {
        let p = if alive_probability.is_nan() { 0.0 } else { alive_probability.clamp(0.0, 1.0) };
        Self::from_fn(rows, cols, |_| Cell::from(rng.gen_bool(p)))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: CellCoord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    pub fn is_alive(&self, coord: CellCoord) -> bool {
        self.get(coord).is_some_and(Cell::is_alive)
    }

    /// Returns the previous state, or `None` when `coord` is off the grid.
    pub fn set(&mut self, coord: CellCoord, cell: Cell) -> Option<Cell> {
        let i = self.index(coord)?;
        Some(std::mem::replace(&mut self.cells[i], cell))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }

    /// Cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (CellCoord::new(i / cols, i % cols), cell))
    }

    fn index(&self, coord: CellCoord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }
}
