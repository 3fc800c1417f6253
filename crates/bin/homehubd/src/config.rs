//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `homehub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use homehub_adapter_virtual::VirtualConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated device timings.
    pub devices: VirtualConfig,
    /// Program parameters.
    pub programs: ProgramsConfig,
    /// Event bus settings.
    pub events: EventsConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Parameters handed to the household programs.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProgramsConfig {
    /// Track the wake-up program plays.
    pub track: String,
}

/// Event bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Broadcast channel capacity.
    pub capacity: usize,
}

impl Config {
    /// Load configuration from `homehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homehub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("HOMEHUB_TRACK") {
            self.programs.track = val;
        }
        if let Ok(val) = std::env::var("HOMEHUB_EVENT_CAPACITY")
            && let Ok(capacity) = val.parse()
        {
            self.events.capacity = capacity;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.events.capacity == 0 {
            return Err(ConfigError::Validation(
                "event capacity must be non-zero".to_string(),
            ));
        }
        if self.programs.track.trim().is_empty() {
            return Err(ConfigError::Validation(
                "wake-up track must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homehubd=info,homehub=info".to_string(),
        }
    }
}

impl Default for ProgramsConfig {
    fn default() -> Self {
        Self {
            track: "Here Comes the Sun".to_string(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.events.capacity, 256);
        assert_eq!(config.programs.track, "Here Comes the Sun");
        assert_eq!(config.devices.flush_duration_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.events.capacity, 256);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [devices]
            command_latency_ms = 5
            flush_duration_ms = 10
            clean_duration_ms = 20

            [programs]
            track = 'Blue Monday'

            [events]
            capacity = 8
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.devices.command_latency_ms, 5);
        assert_eq!(config.devices.flush_duration_ms, 10);
        assert_eq!(config.devices.clean_duration_ms, 20);
        assert_eq!(config.programs.track, "Blue Monday");
        assert_eq!(config.events.capacity, 8);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [devices]
            flush_duration_ms = 1
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.devices.flush_duration_ms, 1);
        assert_eq!(config.devices.clean_duration_ms, 80);
        assert_eq!(config.events.capacity, 256);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.events.capacity, 256);
    }

    #[test]
    fn should_reject_zero_event_capacity() {
        let mut config = Config::default();
        config.events.capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_blank_track() {
        let mut config = Config::default();
        config.programs.track = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
