//! Virtual device configuration.

use std::time::Duration;

use serde::Deserialize;

/// Simulated timings for the virtual devices.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    /// Latency of every light and speaker command, in milliseconds.
    pub command_latency_ms: u64,
    /// How long the toilet stays busy flushing, in milliseconds.
    pub flush_duration_ms: u64,
    /// How long the toilet stays busy cleaning, in milliseconds.
    pub clean_duration_ms: u64,
}

impl VirtualConfig {
    #[must_use]
    pub fn command_latency(&self) -> Duration {
        Duration::from_millis(self.command_latency_ms)
    }

    #[must_use]
    pub fn flush_duration(&self) -> Duration {
        Duration::from_millis(self.flush_duration_ms)
    }

    #[must_use]
    pub fn clean_duration(&self) -> Duration {
        Duration::from_millis(self.clean_duration_ms)
    }
}

impl Default for VirtualConfig {
    fn default() -> Self {
        Self {
            command_latency_ms: 0,
            flush_duration_ms: 50,
            clean_duration_ms: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = VirtualConfig::default();
        assert_eq!(config.command_latency(), Duration::ZERO);
        assert_eq!(config.flush_duration(), Duration::from_millis(50));
        assert_eq!(config.clean_duration(), Duration::from_millis(80));
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let config: VirtualConfig = toml::from_str("flush_duration_ms = 10").unwrap();
        assert_eq!(config.flush_duration_ms, 10);
        assert_eq!(config.clean_duration_ms, 80);
    }
}
