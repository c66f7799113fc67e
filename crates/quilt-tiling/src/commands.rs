use std::fmt;
use std::str::FromStr;

use quilt_common::types::Direction;

/// A user command bound to a key or issued by a script step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingCommand {
    Select(Direction),
    Move(Direction),
    Resize(Direction),
    ToggleResizeMode,
    ToggleFullscreen,
    RequestVertical,
    RequestHorizontal,
}

impl fmt::Display for TilingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TilingCommand::Select(d) => write!(f, "select:{d}"),
            TilingCommand::Move(d) => write!(f, "move:{d}"),
            TilingCommand::Resize(d) => write!(f, "resize:{d}"),
            TilingCommand::ToggleResizeMode => f.write_str("resize-mode"),
            TilingCommand::ToggleFullscreen => f.write_str("fullscreen"),
            TilingCommand::RequestVertical => f.write_str("vertical"),
            TilingCommand::RequestHorizontal => f.write_str("horizontal"),
        }
    }
}

impl FromStr for TilingCommand {
    type Err = String;

    /// Parses `select:<dir>`, `move:<dir>`, `resize:<dir>`, `resize-mode`,
    /// `fullscreen`, `vertical` and `horizontal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Some((verb, direction)) = s.split_once(':') {
            let direction: Direction = direction.parse()?;
            return match verb {
                "select" => Ok(TilingCommand::Select(direction)),
                "move" => Ok(TilingCommand::Move(direction)),
                "resize" => Ok(TilingCommand::Resize(direction)),
                other => Err(format!("unknown directional command '{other}'")),
            };
        }
        match s.as_str() {
            "resize-mode" => Ok(TilingCommand::ToggleResizeMode),
            "fullscreen" => Ok(TilingCommand::ToggleFullscreen),
            "vertical" => Ok(TilingCommand::RequestVertical),
            "horizontal" => Ok(TilingCommand::RequestHorizontal),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}
