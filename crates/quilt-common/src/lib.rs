pub mod errors;
pub mod types;

pub use errors::{ConfigError, HostError, QuiltError, TilingError};
pub use types::{
    Direction, LayoutDirection, Point, Rectangle, Size, WindowId, WindowState,
};

pub type Result<T> = std::result::Result<T, QuiltError>;
