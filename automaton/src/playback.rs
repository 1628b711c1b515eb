// playback.rs - Timer-driven generation stepping for one grid

use std::time::Duration;

use tracing::{debug, trace};

use crate::engine::next_generation;
use crate::grid::Grid;

/// Identifies one armed recurring timer. Ticks carry it back so that
/// ticks from a cancelled timer can be told apart from live ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub token: TimerToken,
}

/// Recurring timers that report back with [`Tick`]s.
pub trait TimerFacility {
    fn arm(&mut self, period: Duration) -> TimerToken;
    fn cancel(&mut self, token: TimerToken);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// A grid, the period it steps at, and whether its timer is running.
#[derive(Debug)]
pub struct AutomatonInstance {
    grid: Grid,
    period: Duration,
    armed: Option<TimerToken>,
    generation: u64,
}

impl AutomatonInstance {
    pub fn new(grid: Grid, period: Duration) -> Self {
        Self {
            grid,
            period,
            armed: None,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Generations stepped since the grid was last replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> PlaybackState {
        if self.armed.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }

    pub fn is_playing(&self) -> bool {
        self.armed.is_some()
    }

    /// Returns false when already playing.
    pub fn start(&mut self, timers: &mut impl TimerFacility) -> bool {
        if self.armed.is_some() {
            return false;
        }
        let token = timers.arm(self.period);
        debug!(?token, period_ms = self.period.as_millis() as u64, "playback started");
        self.armed = Some(token);
        true
    }

    pub fn pause(&mut self, timers: &mut impl TimerFacility) {
        if let Some(token) = self.armed.take() {
            timers.cancel(token);
            debug!(?token, generation = self.generation, "playback paused");
        }
    }

    /// Steps one generation if `token` is the running timer. Returns true
    /// when the grid changed hands and needs rendering.
    pub fn on_tick(&mut self, token: TimerToken) -> bool {
        if self.armed != Some(token) {
            return false;
        }
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        trace!(generation = self.generation, population = self.grid.population(), "tick");
        true
    }

    /// Swaps in a new grid. Playback state is left as is.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }
}

/// In-process timer facility: nothing fires until [`ManualTimers::fire`].
#[derive(Debug, Default)]
pub struct ManualTimers {
    next: u64,
    armed: Vec<(TimerToken, Duration)>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// One tick for every armed timer, oldest first.
    pub fn fire(&self) -> Vec<Tick> {
        self.armed.iter().map(|&(token, _)| Tick { token }).collect()
    }

    pub fn armed(&self) -> impl Iterator<Item = (TimerToken, Duration)> + '_ {
        self.armed.iter().copied()
    }
}

impl TimerFacility for ManualTimers {
    fn arm(&mut self, period: Duration) -> TimerToken {
        self.next += 1;
        let token = TimerToken(self.next);
        self.armed.push((token, period));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.armed.retain(|&(t, _)| t != token);
    }
}
