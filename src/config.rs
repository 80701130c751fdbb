//! Configuration for decoding networks.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Node partition of every decoded network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of sensor (input) nodes, the first positions of a network
    pub sensor_count: usize,
    /// Number of output nodes, directly after the sensors
    pub output_count: usize,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl NetworkConfig {
    pub fn new(sensor_count: usize, output_count: usize) -> Self {
        Self {
            sensor_count,
            output_count,
        }
    }

    /// Position of the first hidden node
    #[inline]
    pub fn hidden_start(&self) -> usize {
        self.sensor_count + self.output_count
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            sensor_count: 2,
            output_count: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.sensor_count == 0 {
            return Err(ConfigError::Invalid("sensor_count must be > 0".to_string()));
        }
        if self.network.output_count == 0 {
            return Err(ConfigError::Invalid("output_count must be > 0".to_string()));
        }
        if self.logging.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log_level `{}`",
                self.logging.log_level
            )));
        }
        Ok(())
    }
}
