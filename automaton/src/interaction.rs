// interaction.rs - Pointer strokes over the foreground grid

use crate::grid::{Cell, CellCoord, Grid};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolMode {
    #[default]
    Brush,
    Eraser,
}

impl ToolMode {
    /// State a cell ends up in after the tool passes over it.
    pub fn paints(self) -> Cell {
        match self {
            ToolMode::Brush => Cell::Alive,
            ToolMode::Eraser => Cell::Dead,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    DragOver,
}

/// Tool selection plus the in-progress stroke.
#[derive(Debug, Default)]
pub struct Pen {
    tool: ToolMode,
    drawing: bool,
}

impl Pen {
    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn select_tool(&mut self, tool: ToolMode) {
        self.tool = tool;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Applies one pointer event and returns the cell that changed, if any.
    ///
    /// Nothing happens while `playing`. A press only starts a stroke on a
    /// valid cell; drags only paint while a stroke is active.
    pub fn apply(
        &mut self,
        grid: &mut Grid,
        kind: PointerKind,
        coord: Option<CellCoord>,
        playing: bool,
    ) -> Option<CellCoord> {
        if playing {
            return None;
        }
        let coord = coord.filter(|&c| grid.contains(c))?;

        match kind {
            PointerKind::Press => self.drawing = true,
            PointerKind::DragOver if !self.drawing => return None,
            PointerKind::DragOver => {}
        }

        let target = self.tool.paints();
        match grid.set(coord, target) {
            Some(previous) if previous != target => Some(coord),
            _ => None, // already in the target state
        }
    }

    /// Ends the stroke. Called for any release, on or off the grid.
    pub fn release(&mut self) {
        self.drawing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAUSED: bool = false;
    const PLAYING: bool = true;

    #[test]
    fn press_with_brush_sets_cell_alive() {
        let mut grid = Grid::square(4);
        let mut pen = Pen::default();
        let at = CellCoord::new(1, 2);

        assert_eq!(pen.apply(&mut grid, PointerKind::Press, Some(at), PAUSED), Some(at));
        assert!(grid.is_alive(at));
        assert!(pen.is_drawing());
    }

    #[test]
    fn brush_over_live_cell_changes_nothing() {
        let mut grid = Grid::square(4);
        let at = CellCoord::new(0, 0);
        grid.set(at, Cell::Alive);
        let before = grid.clone();

        let mut pen = Pen::default();
        assert_eq!(pen.apply(&mut grid, PointerKind::Press, Some(at), PAUSED), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn eraser_clears_and_is_idempotent() {
        let mut grid = Grid::square(4);
        let at = CellCoord::new(3, 3);
        grid.set(at, Cell::Alive);

        let mut pen = Pen::default();
        pen.select_tool(ToolMode::Eraser);
        assert_eq!(pen.apply(&mut grid, PointerKind::Press, Some(at), PAUSED), Some(at));
        assert!(!grid.is_alive(at));
        assert_eq!(pen.apply(&mut grid, PointerKind::DragOver, Some(at), PAUSED), None);
        assert!(grid.is_extinct());
    }

    #[test]
    fn drag_paints_only_during_a_stroke() {
        let mut grid = Grid::square(4);
        let mut pen = Pen::default();

        assert_eq!(pen.apply(&mut grid, PointerKind::DragOver, Some(CellCoord::new(0, 1)), PAUSED), None);
        assert!(grid.is_extinct());

        pen.apply(&mut grid, PointerKind::Press, Some(CellCoord::new(0, 0)), PAUSED);
        pen.apply(&mut grid, PointerKind::DragOver, Some(CellCoord::new(0, 1)), PAUSED);
        pen.apply(&mut grid, PointerKind::DragOver, Some(CellCoord::new(0, 2)), PAUSED);
        pen.release();
        pen.apply(&mut grid, PointerKind::DragOver, Some(CellCoord::new(0, 3)), PAUSED);

        assert_eq!(grid.population(), 3);
        assert!(!grid.is_alive(CellCoord::new(0, 3)));
    }

    #[test]
    fn playing_blocks_all_input() {
        let mut grid = Grid::square(4);
        let mut pen = Pen::default();
        let at = CellCoord::new(2, 2);

        assert_eq!(pen.apply(&mut grid, PointerKind::Press, Some(at), PLAYING), None);
        assert!(grid.is_extinct());
        assert!(!pen.is_drawing());
    }

    #[test]
    fn missing_or_outside_coordinates_are_ignored() {
        let mut grid = Grid::square(4);
        let mut pen = Pen::default();

        assert_eq!(pen.apply(&mut grid, PointerKind::Press, None, PAUSED), None);
        assert_eq!(pen.apply(&mut grid, PointerKind::Press, Some(CellCoord::new(4, 0)), PAUSED), None);
        assert!(!pen.is_drawing());
        assert!(grid.is_extinct());
    }
}
