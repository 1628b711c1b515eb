// error.rs - Error types for the automaton crate

use std::path::PathBuf;

use thiserror::Error;

/// Malformed grid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid needs at least one row and one column")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Configuration loading and validation failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failures bringing up the timer thread.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("failed to build timer runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to spawn timer thread: {0}")]
    Thread(#[source] std::io::Error),
}
