// render.rs - Seam between grid state and whatever draws it

use crate::grid::{CellCoord, Grid};

/// Display collaborator. The core only ever hands it coordinates and
/// alive/dead flags.
pub trait RenderAdapter {
    type Handle: Copy;

    fn create_cell_visual(&mut self, row: usize, col: usize) -> Self::Handle;
    fn set_cell_alive_visual(&mut self, handle: Self::Handle, alive: bool);
}

/// (row, col) → visual handle table, kept on the render side.
#[derive(Debug, Clone)]
pub struct CellVisuals<H> {
    rows: usize,
    cols: usize,
    handles: Vec<H>,
}

impl<H: Copy> CellVisuals<H> {
    /// Creates one visual per cell, row-major.
    pub fn build<A>(adapter: &mut A, rows: usize, cols: usize) -> Self
    where
        A: RenderAdapter<Handle = H>,
    {
        let mut handles = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                handles.push(adapter.create_cell_visual(row, col));
            }
        }
        Self { rows, cols, handles }
    }

    pub fn for_grid<A>(adapter: &mut A, grid: &Grid) -> Self
    where
        A: RenderAdapter<Handle = H>,
    {
        Self::build(adapter, grid.rows(), grid.cols())
    }

    pub fn handle(&self, coord: CellCoord) -> Option<H> {
        (coord.row < self.rows && coord.col < self.cols)
            .then(|| self.handles[coord.row * self.cols + coord.col])
    }

    /// Full render pass. Cells outside the visual table are skipped.
    pub fn paint<A>(&self, grid: &Grid, adapter: &mut A)
    where
        A: RenderAdapter<Handle = H>,
    {
        for (coord, cell) in grid.iter() {
            if let Some(handle) = self.handle(coord) {
                adapter.set_cell_alive_visual(handle, cell.is_alive());
            }
        }
    }

    pub fn paint_cell<A>(&self, grid: &Grid, coord: CellCoord, adapter: &mut A)
    where
        A: RenderAdapter<Handle = H>,
    {
        if let (Some(handle), Some(cell)) = (self.handle(coord), grid.get(coord)) {
            adapter.set_cell_alive_visual(handle, cell.is_alive());
        }
    }
}
