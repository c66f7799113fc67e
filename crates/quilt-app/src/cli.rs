use clap::Parser;
use quilt_common::types::Size;

/// Replay tiling commands against a headless output and print the
/// resulting layout.
#[derive(Parser, Debug)]
#[command(name = "quilt", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Output size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1920x1080", value_parser = parse_output_size)]
    pub output: Size,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Steps to run in order: `open`, `close`, `workspace:<n>`, or a tiling
    /// command such as `select:left`, `move:right`, `resize:up`,
    /// `resize-mode`, `fullscreen`, `vertical`, `horizontal`.
    #[arg(value_name = "STEP")]
    pub steps: Vec<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_output_size(s: &str) -> Result<Size, String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: i32 = width.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let height: i32 = height.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("output size must be positive, got {width}x{height}"));
    }
    Ok(Size::new(width, height))
}
