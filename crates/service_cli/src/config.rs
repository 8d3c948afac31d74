//! CLI configuration management
//!
//! Settings are resolved in three layers: built-in defaults, an optional
//! TOML file, then command-line flags.
//!
//! ```toml
//! log_level = "debug"
//!
//! [implied_vol]
//! lower_bound = 0.05
//! tolerance = 1e-12
//!
//! [monte_carlo]
//! n_paths = 262144
//! seed = 42
//! ```

use std::path::Path;
use std::str::FromStr;

use pricer_core::types::PricingError;
use pricer_models::analytical::ImpliedVolConfig;
use pricer_pricing::mc::MonteCarloConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::{CliError, Result};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in the configuration file and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Solver iterations and per-path detail
    Trace,
    /// Brackets, chunk counts, resolved settings
    Debug,
    /// Command progress
    Info,
    /// Recoverable problems only
    #[default]
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Monte Carlo settings; unset fields fall back to the engine defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonteCarloSection {
    /// Number of terminal values to simulate
    pub n_paths: Option<usize>,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
    /// Antithetic pairs per parallel chunk
    pub chunk_size: Option<usize>,
}

impl MonteCarloSection {
    /// Overlays command-line values onto the file values.
    pub fn merge(
        self,
        n_paths: Option<usize>,
        seed: Option<u64>,
        chunk_size: Option<usize>,
    ) -> Self {
        Self {
            n_paths: n_paths.or(self.n_paths),
            seed: seed.or(self.seed),
            chunk_size: chunk_size.or(self.chunk_size),
        }
    }

    /// Builds a validated engine configuration.
    pub fn to_config(&self) -> std::result::Result<MonteCarloConfig, PricingError> {
        let mut builder = MonteCarloConfig::builder().maybe_seed(self.seed);
        if let Some(n_paths) = self.n_paths {
            builder = builder.n_paths(n_paths);
        }
        if let Some(chunk_size) = self.chunk_size {
            builder = builder.chunk_size(chunk_size);
        }
        builder.build()
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Implied volatility search settings
    pub implied_vol: ImpliedVolConfig,
    /// Monte Carlo settings
    pub monte_carlo: MonteCarloSection,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::FileError(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) if !path.exists() => {
                Err(CliError::FileNotFound(path.display().to_string()))
            }
            Some(path) => Ok(Self::from_file(path)?),
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(mut self, log_level: Option<LogLevel>, verbose: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        } else if verbose {
            self.log_level = LogLevel::Debug;
        }
        self
    }
}
