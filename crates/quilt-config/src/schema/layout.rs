//! Tiling layout configuration types.

use quilt_common::LayoutDirection;
use serde::{Deserialize, Serialize};

/// Tiling layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap between adjacent windows in pixels (valid range: 0-100).
    pub inner_gaps_x: u32,
    /// Vertical gap between adjacent windows in pixels (valid range: 0-100).
    pub inner_gaps_y: u32,
    /// Axis along which a new window is placed next to the selected one.
    pub default_layout_direction: LayoutDirection,
    /// Smallest width a tiled window may be shrunk to (valid range: 1-1000).
    pub min_window_width: u32,
    /// Smallest height a tiled window may be shrunk to (valid range: 1-1000).
    pub min_window_height: u32,
    /// Pixels added or removed per resize step (valid range: 1-500).
    pub resize_jump: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inner_gaps_x: 10,
            inner_gaps_y: 10,
            default_layout_direction: LayoutDirection::Horizontal,
            min_window_width: 50,
            min_window_height: 50,
            resize_jump: 50,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
