// config.rs - Tunables, loaded from TOML with defaults for anything missing

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::sizing::{ReservedSpace, SizingPolicy};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ForegroundConfig {
    pub tick_ms: u64,
    pub sizing: SizingPolicy,
    pub reserved: ReservedSpace,
}

impl Default for ForegroundConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            sizing: SizingPolicy::default(),
            reserved: ReservedSpace::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    pub dimension: usize,
    pub cell_size: u32,
    pub tick_ms: u64,
    pub alive_probability: f64,
    /// Fixed seed for a reproducible background; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            dimension: 120,
            cell_size: 20,
            tick_ms: 200,
            alive_probability: 0.3,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 1000.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    pub foreground: ForegroundConfig,
    pub background: BackgroundConfig,
    pub window: WindowConfig,
    pub resize_debounce_ms: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            foreground: ForegroundConfig::default(),
            background: BackgroundConfig::default(),
            window: WindowConfig::default(),
            resize_debounce_ms: 250,
        }
    }
}

impl LifeConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::from_toml(&content)?;
                info!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizing = &self.foreground.sizing;
        if sizing.target_cell_count == 0 {
            return Err(invalid("foreground.sizing.target_cell_count must be positive"));
        }
        if sizing.min_cell_size == 0 || sizing.min_cell_size > sizing.max_cell_size {
            return Err(invalid("foreground.sizing cell size bounds must satisfy 0 < min <= max"));
        }
        if sizing.min_dimension == 0 || sizing.min_dimension > sizing.max_dimension {
            return Err(invalid("foreground.sizing dimension bounds must satisfy 0 < min <= max"));
        }
        if self.foreground.tick_ms == 0 || self.background.tick_ms == 0 {
            return Err(invalid("tick_ms must be positive"));
        }
        if self.background.dimension == 0 || self.background.cell_size == 0 {
            return Err(invalid("background dimension and cell_size must be positive"));
        }
        if !(0.0..=1.0).contains(&self.background.alive_probability) {
            return Err(invalid("background.alive_probability must be within [0, 1]"));
        }
        Ok(())
    }

    pub fn foreground_period(&self) -> Duration {
        Duration::from_millis(self.foreground.tick_ms)
    }

    pub fn background_period(&self) -> Duration {
        Duration::from_millis(self.background.tick_ms)
    }

    pub fn resize_quiet(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid(message.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = LifeConfig::default();
        assert_eq!(config.foreground_period(), Duration::from_millis(100));
        assert_eq!(config.background_period(), Duration::from_millis(200));
        assert_eq!(config.resize_quiet(), Duration::from_millis(250));
        assert_eq!(config.background.dimension, 120);
        assert_eq!(config.background.cell_size, 20);
        assert_eq!(config.foreground.sizing.min_cell_size, 12);
        assert_eq!(config.foreground.sizing.max_cell_size, 15);
        assert_eq!(config.foreground.sizing.min_dimension, 37);
        assert_eq!(config.foreground.sizing.max_dimension, 70);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = LifeConfig::from_toml(
            r#"
            resize_debounce_ms = 500

            [background]
            seed = 9
            alive_probability = 0.5

            [foreground.sizing]
            max_dimension = 90
            "#,
        )
        .unwrap();

        assert_eq!(config.resize_debounce_ms, 500);
        assert_eq!(config.background.seed, Some(9));
        assert_eq!(config.background.alive_probability, 0.5);
        assert_eq!(config.background.dimension, 120);
        assert_eq!(config.foreground.sizing.max_dimension, 90);
        assert_eq!(config.foreground.sizing.min_dimension, 37);
        assert_eq!(config.foreground.tick_ms, 100);
    }

    #[test]
    fn crossed_bounds_are_rejected() {
        let err = LifeConfig::from_toml("[foreground.sizing]\nmin_cell_size = 20\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");

        let err = LifeConfig::from_toml("[background]\nalive_probability = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = LifeConfig::from_toml("[foreground\ntick_ms = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = LifeConfig::load("definitely/not/here/gameoflife.toml").unwrap();
        assert_eq!(config, LifeConfig::default());
    }
}
