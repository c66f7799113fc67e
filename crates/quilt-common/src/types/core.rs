use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction for navigation, movement and resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The lane axis along which this direction travels.
    pub fn axis(self) -> LayoutDirection {
        match self {
            Direction::Left | Direction::Right => LayoutDirection::Horizontal,
            Direction::Up | Direction::Down => LayoutDirection::Vertical,
        }
    }

    /// Left and up travel towards lower child indices.
    pub fn is_negative(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

/// Axis along which a lane arranges its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl LayoutDirection {
    pub fn perpendicular(self) -> LayoutDirection {
        match self {
            LayoutDirection::Horizontal => LayoutDirection::Vertical,
            LayoutDirection::Vertical => LayoutDirection::Horizontal,
        }
    }
}

impl FromStr for LayoutDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(LayoutDirection::Horizontal),
            "vertical" => Ok(LayoutDirection::Vertical),
            other => Err(format!("unknown layout direction '{other}'")),
        }
    }
}

/// Presentation state of a host window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Restored,
    Maximized,
    Fullscreen,
    Minimized,
    Hidden,
}

impl WindowState {
    /// Maximized counts as fullscreen: a tiled window toggled to fullscreen
    /// is maximized over the output.
    pub fn is_fullscreen(self) -> bool {
        matches!(self, WindowState::Maximized | WindowState::Fullscreen)
    }
}

/// Opaque handle to a host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}
