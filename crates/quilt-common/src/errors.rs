use std::path::PathBuf;

use crate::types::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the host behind the tiling interface.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("tiling interface error: {0}")]
    InterfaceError(String),

    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),
}

/// Internal invariant violations. These indicate a bookkeeping bug
/// elsewhere and are surfaced rather than recovered from.
#[derive(Debug, thiserror::Error)]
pub enum TilingError {
    #[error("workspace {0} does not exist on this output")]
    WorkspaceNotFound(u32),

    #[error("output has no active workspace")]
    NoActiveWorkspace,
}

#[derive(Debug, thiserror::Error)]
pub enum QuiltError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Tiling(#[from] TilingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
