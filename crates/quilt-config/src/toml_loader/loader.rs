//! Reading config from disk.

use crate::schema::QuiltConfig;
use crate::validation;
use quilt_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse TOML text into a config. Missing fields take their defaults;
/// out-of-range values are reported with a warning but kept.
pub fn parse_config(text: &str) -> Result<QuiltConfig, ConfigError> {
    let config: QuiltConfig = toml::from_str(text)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; keeping parsed values");
    }
    Ok(config)
}

/// Load config from a specific TOML file.
pub fn load_from_path(path: &Path) -> Result<QuiltConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let config = parse_config(&text)?;
    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Load config from [`default_config_path`]. A missing file is replaced by
/// the commented template and defaults are returned.
pub fn load_default() -> Result<QuiltConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "No config found, creating default");
            create_default_config(&path)?;
            Ok(QuiltConfig::default())
        }
        other => other,
    }
}
