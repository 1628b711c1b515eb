// canvas.rs - Retained cell visuals that the egui painter draws from each frame

use automaton::RenderAdapter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellVisual {
    pub row: usize,
    pub col: usize,
    pub alive: bool,
}

/// Render target for one grid. Handles are indices into `cells`.
#[derive(Debug, Default)]
pub struct Canvas {
    cells: Vec<CellVisual>,
}

impl Canvas {
    /// Drops every visual; call before building visuals for a new grid.
    pub fn reset(&mut self) {
        self.cells.clear();
    }

    pub fn cells(&self) -> &[CellVisual] {
        &self.cells
    }
}

impl RenderAdapter for Canvas {
    type Handle = usize;

    fn create_cell_visual(&mut self, row: usize, col: usize) -> usize {
        self.cells.push(CellVisual { row, col, alive: false });
        self.cells.len() - 1
    }

    fn set_cell_alive_visual(&mut self, handle: usize, alive: bool) {
        if let Some(visual) = self.cells.get_mut(handle) {
            visual.alive = alive;
        }
    }
}
