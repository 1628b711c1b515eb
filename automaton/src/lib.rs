// lib.rs - Headless core for Conway's Game of Life
//
// Two simulations share one transition rule: an editable foreground grid and
// a self-running background grid. Drawing is left to a `RenderAdapter`.

pub mod config;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod playback;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod sizing;

pub use config::LifeConfig;
pub use engine::{live_neighbors, next_generation};
pub use error::{ConfigError, GridError, SchedulerError};
pub use grid::{Cell, CellCoord, Grid};
pub use interaction::{PointerKind, ToolMode};
pub use playback::{AutomatonInstance, ManualTimers, PlaybackState, Tick, TimerFacility, TimerToken};
pub use render::{CellVisuals, RenderAdapter};
pub use scheduler::TokioTimers;
pub use session::{Ambient, Session};
pub use sizing::{Coverage, Dimensions, ReservedSpace, SizingPolicy};
