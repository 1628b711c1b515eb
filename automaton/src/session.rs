// session.rs - Foreground (user) and background (ambient) simulations

use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::grid::{CellCoord, Grid};
use crate::interaction::{Pen, PointerKind, ToolMode};
use crate::playback::{AutomatonInstance, PlaybackState, TimerFacility, TimerToken};

/// The editable grid: starts paused, can be drawn on while paused.
#[derive(Debug)]
pub struct Session {
    instance: AutomatonInstance,
    pen: Pen,
}

impl Session {
    pub fn new(dimension: usize, period: Duration) -> Self {
        Self {
            instance: AutomatonInstance::new(Grid::square(dimension), period),
            pen: Pen::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        self.instance.grid()
    }

    pub fn generation(&self) -> u64 {
        self.instance.generation()
    }

    pub fn state(&self) -> PlaybackState {
        self.instance.state()
    }

    pub fn is_playing(&self) -> bool {
        self.instance.is_playing()
    }

    pub fn tool(&self) -> ToolMode {
        self.pen.tool()
    }

    pub fn select_tool(&mut self, tool: ToolMode) {
        self.pen.select_tool(tool);
    }

    pub fn start(&mut self, timers: &mut impl TimerFacility) -> bool {
        self.instance.start(timers)
    }

    pub fn pause(&mut self, timers: &mut impl TimerFacility) {
        self.instance.pause(timers);
    }

    pub fn toggle_play_pause(&mut self, timers: &mut impl TimerFacility) -> PlaybackState {
        if self.instance.is_playing() {
            self.instance.pause(timers);
        } else {
            self.instance.start(timers);
        }
        self.instance.state()
    }

    /// Pauses, then empties the grid. The caller re-renders.
    pub fn clear(&mut self, timers: &mut impl TimerFacility) {
        self.instance.pause(timers);
        let grid = self.instance.grid();
        let (rows, cols) = (grid.rows(), grid.cols());
        self.instance.replace_grid(Grid::new(rows, cols));
    }

    /// Pauses and starts over on an empty grid of a new size. Tool mode is kept.
    pub fn reinitialize(&mut self, dimension: usize, timers: &mut impl TimerFacility) {
        self.instance.pause(timers);
        self.pen.release();
        self.instance.replace_grid(Grid::square(dimension));
        info!(dimension, "foreground grid rebuilt");
    }

    pub fn handle_pointer(&mut self, kind: PointerKind, coord: Option<CellCoord>) -> Option<CellCoord> {
        let playing = self.instance.is_playing();
        self.pen.apply(self.instance.grid_mut(), kind, coord, playing)
    }

    pub fn release_pointer(&mut self) {
        self.pen.release();
    }

    pub fn on_tick(&mut self, token: TimerToken) -> bool {
        self.instance.on_tick(token)
    }
}

/// The decorative grid: always playing, never user-pausable.
#[derive(Debug)]
pub struct Ambient {
    instance: AutomatonInstance,
    alive_probability: f64,
}

impl Ambient {
    /// Seeds a `dimension`² grid and starts it.
    pub fn launch<R: Rng>(
        dimension: usize,
        period: Duration,
        alive_probability: f64,
        rng: &mut R,
        timers: &mut impl TimerFacility,
    ) -> Self {
        let grid = Grid::random(dimension, dimension, alive_probability, rng);
        let mut instance = AutomatonInstance::new(grid, period);
        instance.start(timers);
        Self {
            instance,
            alive_probability,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.instance.grid()
    }

    pub fn generation(&self) -> u64 {
        self.instance.generation()
    }

    pub fn state(&self) -> PlaybackState {
        self.instance.state()
    }

    /// Stops the running timer, seeds a fresh grid of the same size and restarts.
    pub fn reseed<R: Rng>(&mut self, rng: &mut R, timers: &mut impl TimerFacility) {
        self.instance.pause(timers);
        let dimension = self.instance.grid().rows();
        let grid = Grid::random(dimension, dimension, self.alive_probability, rng);
        self.instance.replace_grid(grid);
        self.instance.start(timers);
        info!(dimension, population = self.instance.grid().population(), "background grid reseeded");
    }

    pub fn on_tick(&mut self, token: TimerToken) -> bool {
        self.instance.on_tick(token)
    }
}
