//! Configuration schema types for quilt.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod logging;

pub use layout::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct QuiltConfig {
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: QuiltConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout.inner_gaps_x, 10);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_parse_independently() {
        let toml_str = r#"
[layout]
inner_gaps_y = 0

[logging]
level = "warn"
"#;
        let config: QuiltConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.layout.inner_gaps_y, 0);
        assert_eq!(config.layout.inner_gaps_x, 10);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut config = QuiltConfig::default();
        config.layout.resize_jump = 25;
        let text = toml::to_string(&config).unwrap();
        let parsed: QuiltConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.layout.resize_jump, 25);
    }
}
