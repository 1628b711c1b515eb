// sizing.rs - Derives grid dimensions from the viewport size

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pixels kept free around the foreground grid for page margins and controls.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ReservedSpace {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for ReservedSpace {
    fn default() -> Self {
        Self {
            horizontal: 20.0,
            vertical: 160.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub cell_size: u32,
    /// Applies to both rows and columns.
    pub grid_dimension: usize,
}

/// Bounds for the foreground grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SizingPolicy {
    pub target_cell_count: u32,
    pub min_cell_size: u32,
    pub max_cell_size: u32,
    pub min_dimension: usize,
    pub max_dimension: usize,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            target_cell_count: 30,
            min_cell_size: 12,
            max_cell_size: 15,
            min_dimension: 37,
            max_dimension: 70,
        }
    }
}

impl SizingPolicy {
    /// Picks a cell size from the available width, then the largest square
    /// grid that fits both axes, with both values clamped to the policy bounds.
    pub fn compute_dimensions(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        reserved: ReservedSpace,
    ) -> Dimensions {
        let available_width = (viewport_width - reserved.horizontal) as f64;
        let available_height = (viewport_height - reserved.vertical) as f64;

        let candidate = (available_width / self.target_cell_count.max(1) as f64).floor();
        let cell_size = clamp_to(candidate, self.min_cell_size as f64, self.max_cell_size as f64) as u32;

        let size = cell_size.max(1) as f64;
        let fit = (available_width / size).floor().min((available_height / size).floor());
        let grid_dimension = clamp_to(fit, self.min_dimension as f64, self.max_dimension as f64) as usize;

        debug!(viewport_width, viewport_height, cell_size, grid_dimension, "computed grid dimensions");

        Dimensions { cell_size, grid_dimension }
    }
}

/// Lower bound wins when the bounds cross, and NaN falls to the lower bound.
fn clamp_to(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() { lo } else { value.min(hi).max(lo) }
}

/// How many background cells it takes to cover the viewport.
///
/// Layout only: the logical background grid keeps its fixed dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub cols: usize,
    pub rows: usize,
}

impl Coverage {
    pub fn of(viewport_width: f32, viewport_height: f32, cell_size: u32) -> Self {
        let size = cell_size.max(1) as f32;
        Self {
            cols: (viewport_width.max(0.0) / size).ceil() as usize,
            rows: (viewport_height.max(0.0) / size).ceil() as usize,
        }
    }

    /// Coverage limited to what a `dimension`-sized grid can supply.
    pub fn within(self, dimension: usize) -> Self {
        Self {
            cols: self.cols.min(dimension),
            rows: self.rows.min(dimension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: f32, height: f32) -> Dimensions {
        SizingPolicy::default().compute_dimensions(width, height, ReservedSpace::default())
    }

    #[test]
    fn narrow_viewport_hits_minimums() {
        let d = dims(300.0, 600.0);
        assert_eq!(d.cell_size, 12);
        assert_eq!(d.grid_dimension, 37);
    }

    #[test]
    fn tiny_and_negative_viewports_never_go_below_minimums() {
        for (w, h) in [(0.0, 0.0), (10.0, 10.0), (-500.0, -500.0), (f32::NAN, 100.0)] {
            let d = dims(w, h);
            assert_eq!(d.cell_size, 12, "viewport {w}x{h}");
            assert_eq!(d.grid_dimension, 37, "viewport {w}x{h}");
        }
    }

    #[test]
    fn large_viewport_hits_maximums() {
        let d = dims(3840.0, 2160.0);
        assert_eq!(d.cell_size, 15);
        assert_eq!(d.grid_dimension, 70);
    }

    #[test]
    fn height_limits_dimension() {
        // 1220 wide: cell 15, width fits 80 cells; 160 + 60*15 tall fits 60.
        let d = dims(1220.0, 1060.0);
        assert_eq!(d.cell_size, 15);
        assert_eq!(d.grid_dimension, 60);
    }

    #[test]
    fn mid_width_picks_intermediate_cell_size() {
        // (410 - 20) / 30 = 13
        let d = dims(410.0, 2000.0);
        assert_eq!(d.cell_size, 13);
        assert_eq!(d.grid_dimension, 37);
    }

    #[test]
    fn coverage_rounds_up() {
        let c = Coverage::of(1001.0, 400.0, 20);
        assert_eq!(c, Coverage { cols: 51, rows: 20 });
        assert_eq!(Coverage::of(5000.0, 100.0, 20).within(120), Coverage { cols: 120, rows: 5 });
    }
}
