//! The narrow capability set the tiling core needs from its host.

use quilt_common::errors::HostError;
use quilt_common::types::{Rectangle, WindowId, WindowState};

pub mod headless;

pub use headless::{HeadlessInterface, HostCall, WindowRecord};

pub type Result<T> = std::result::Result<T, HostError>;

/// Host-side window operations driven by the tiling tree.
///
/// Everything runs on the host's event thread; implementations may use
/// interior mutability since every method takes `&self`.
pub trait TilingInterface {
    fn is_fullscreen(&self, window: WindowId) -> bool;
    fn get_state(&self, window: WindowId) -> WindowState;
    fn change_state(&self, window: WindowId, state: WindowState) -> Result<()>;
    fn clip(&self, window: WindowId, area: Rectangle) -> Result<()>;
    fn noclip(&self, window: WindowId) -> Result<()>;
    /// Move and resize `window`, which currently occupies `previous`.
    fn set_rectangle(&self, window: WindowId, previous: Rectangle, area: Rectangle) -> Result<()>;
    fn select_active_window(&self, window: WindowId) -> Result<()>;
}
