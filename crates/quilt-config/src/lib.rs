//! quilt configuration: the `[layout]` and `[logging]` sections of
//! `config.toml`, their defaults, and range validation.
//!
//! ```rust,no_run
//! let config = quilt_config::load_config().expect("failed to load config");
//! assert!(config.layout.resize_jump > 0);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LayoutConfig, LogLevel, LoggingConfig, QuiltConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path, parse_config};

use quilt_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<QuiltConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &QuiltConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
