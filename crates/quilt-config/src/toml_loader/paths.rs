//! Where the config file lives, and writing the commented template there.

use quilt_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Environment variable that points quilt at a config file directly.
pub const CONFIG_ENV_VAR: &str = "QUILT_CONFIG";

/// `$QUILT_CONFIG` when set, else `<platform config dir>/quilt/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("quilt").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented default template to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |action: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {action} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| io_error("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| io_error("write default config to", path, e))?;

    info!(path = %path.display(), "Wrote default config");
    Ok(())
}
