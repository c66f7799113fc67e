//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level, scoped to quilt crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "quilt=trace",
            LogLevel::Debug => "quilt=debug",
            LogLevel::Info => "quilt=info",
            LogLevel::Warn => "quilt=warn",
            LogLevel::Error => "quilt=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
