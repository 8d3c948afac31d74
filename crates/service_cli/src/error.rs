//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing library failure.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// JSON output failure.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: CliError = PricingError::InvalidPathCount(0).into();
        assert_eq!(err.to_string(), "Invalid path count 0: must be positive");
    }

    #[test]
    fn test_config_error_wraps_source() {
        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error: Invalid log level: loud"));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = CliError::FileNotFound("missing.toml".to_string());
        assert_eq!(err.to_string(), "File not found: missing.toml");
    }
}
