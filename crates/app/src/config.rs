//! Environment-driven configuration.

use std::path::PathBuf;
use std::time::Duration;

use stockroom_observability::{LogConfig, LogFormat};
use thiserror::Error;

pub const ENV_TICKS: &str = "STOCKROOM_TICKS";
pub const ENV_TICK_INTERVAL_MS: &str = "STOCKROOM_TICK_INTERVAL_MS";
pub const ENV_ROTATE_EVERY: &str = "STOCKROOM_ROTATE_EVERY";
pub const ENV_AUTO_BUY: &str = "STOCKROOM_AUTO_BUY";
pub const ENV_SEED: &str = "STOCKROOM_SEED";
pub const ENV_DUMP_PATH: &str = "STOCKROOM_DUMP_PATH";
pub const ENV_LOG: &str = "STOCKROOM_LOG";
pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";
pub const ENV_OUTPUT: &str = "STOCKROOM_OUTPUT";

/// How the binary prints its final summary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Summary panel lines, then one line per catalog tile.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of frames the driver runs.
    pub ticks: u64,
    /// Sleep between frames; zero runs flat out.
    pub tick_interval: Duration,
    /// Frames between report strategy switches; zero never switches.
    pub rotate_every: u64,
    /// Start with the auto buyer enabled.
    pub auto_buy: bool,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    pub dump_path: PathBuf,
    pub output: OutputFormat,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            tick_interval: Duration::ZERO,
            rotate_every: 150,
            auto_buy: true,
            seed: None,
            dump_path: PathBuf::from("inventory.txt"),
            output: OutputFormat::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_TICKS) {
            config.ticks = parse_u64(ENV_TICKS, &v)?;
        }
        if let Some(v) = lookup(ENV_TICK_INTERVAL_MS) {
            config.tick_interval = Duration::from_millis(parse_u64(ENV_TICK_INTERVAL_MS, &v)?);
        }
        if let Some(v) = lookup(ENV_ROTATE_EVERY) {
            config.rotate_every = parse_u64(ENV_ROTATE_EVERY, &v)?;
        }
        if let Some(v) = lookup(ENV_AUTO_BUY) {
            config.auto_buy = parse_bool(ENV_AUTO_BUY, &v)?;
        }
        if let Some(v) = lookup(ENV_SEED) {
            config.seed = Some(parse_u64(ENV_SEED, &v)?);
        }
        if let Some(v) = lookup(ENV_DUMP_PATH) {
            if v.trim().is_empty() {
                return Err(invalid(ENV_DUMP_PATH, &v));
            }
            config.dump_path = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_OUTPUT) {
            config.output = OutputFormat::parse(&v).ok_or_else(|| invalid(ENV_OUTPUT, &v))?;
        }
        if let Some(v) = lookup(ENV_LOG) {
            config.log.default_directive = v;
        }
        if let Some(v) = lookup(ENV_LOG_FORMAT) {
            config.log.format = LogFormat::parse(&v).ok_or_else(|| invalid(ENV_LOG_FORMAT, &v))?;
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
    }
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dump_path, PathBuf::from("inventory.txt"));
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_TICKS, "42"),
            (ENV_TICK_INTERVAL_MS, "16"),
            (ENV_ROTATE_EVERY, "0"),
            (ENV_AUTO_BUY, "off"),
            (ENV_SEED, "7"),
            (ENV_DUMP_PATH, "/tmp/stock.txt"),
            (ENV_OUTPUT, "JSON"),
            (ENV_LOG, "stockroom_inventory=debug"),
            (ENV_LOG_FORMAT, "json"),
        ]))
        .unwrap();

        assert_eq!(config.ticks, 42);
        assert_eq!(config.tick_interval, Duration::from_millis(16));
        assert_eq!(config.rotate_every, 0);
        assert!(!config.auto_buy);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.dump_path, PathBuf::from("/tmp/stock.txt"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log.default_directive, "stockroom_inventory=debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_TICKS, "many")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: ENV_TICKS,
                value: "many".to_string()
            }
        );
        assert!(AppConfig::from_lookup(lookup(&[(ENV_AUTO_BUY, "maybe")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(ENV_OUTPUT, "yaml")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(ENV_DUMP_PATH, " ")])).is_err());
    }
}
