//! Headless replay of tiling steps.
//!
//! A scenario owns one output backed by [`HeadlessInterface`], starts on
//! workspace 1, and applies steps the way a compositor would forward
//! window events and key bindings.

use std::fmt;
use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;

use quilt_common::types::{LayoutDirection, Rectangle, Size};
use quilt_common::{QuiltError, Result};
use quilt_config::LayoutConfig;
use quilt_tiling::tree::{LeafSnapshot, TilingMode};
use quilt_tiling::{
    FloatingWindow, HeadlessInterface, Output, TilingCommand, TilingOptions,
    WindowSpecification,
};
use serde::Serialize;
use tracing::{debug, info};

/// One line of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Map a new window and tile it next to the selection.
    Open,
    /// Close the selected window.
    Close,
    /// Float the selected tile, or tile the selected floating window.
    Float,
    /// Switch to (creating if needed) a numbered workspace.
    Workspace(u32),
    Command(TilingCommand),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Open => f.write_str("open"),
            Step::Close => f.write_str("close"),
            Step::Float => f.write_str("float"),
            Step::Workspace(n) => write!(f, "workspace:{n}"),
            Step::Command(command) => write!(f, "{command}"),
        }
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "open" => return Ok(Step::Open),
            "close" => return Ok(Step::Close),
            "float" => return Ok(Step::Float),
            _ => {}
        }
        if let Some(number) = trimmed.strip_prefix("workspace:") {
            return number
                .parse()
                .map(Step::Workspace)
                .map_err(|e| format!("bad workspace number '{number}': {e}"));
        }
        trimmed.parse().map(Step::Command)
    }
}

/// Build tiling options from the `[layout]` config section.
pub fn tiling_options(layout: &LayoutConfig) -> TilingOptions {
    TilingOptions {
        gap_x: to_i32(layout.inner_gaps_x),
        gap_y: to_i32(layout.inner_gaps_y),
        default_direction: layout.default_layout_direction,
        min_size: Size::new(
            to_i32(layout.min_window_width),
            to_i32(layout.min_window_height),
        ),
        resize_jump: to_i32(layout.resize_jump),
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: String,
    pub applied: bool,
}

/// Final layout of the active workspace plus what each step did.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub output: Rectangle,
    pub workspace: Option<u32>,
    pub mode: TilingMode,
    pub default_direction: LayoutDirection,
    pub windows: Vec<LeafSnapshot>,
    pub floating: Vec<FloatingWindow>,
    pub steps: Vec<StepOutcome>,
}

impl Report {
    /// Write the report as pretty JSON followed by a newline.
    pub fn write_json(&self, mut out: impl Write) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QuiltError::Other(format!("failed to serialize layout: {e}")))?;
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok(())
    }
}

pub struct Scenario {
    host: Rc<HeadlessInterface>,
    output: Output,
    outcomes: Vec<StepOutcome>,
}

impl Scenario {
    pub fn new(size: Size, options: TilingOptions) -> Result<Self> {
        let area = Rectangle::new(0, 0, size.width, size.height);
        let host = Rc::new(HeadlessInterface::new(area));
        let mut output = Output::new(area, host.clone(), options);
        output.advise_new_workspace(1);
        output.advise_workspace_active(1)?;
        Ok(Self {
            host,
            output,
            outcomes: Vec::new(),
        })
    }

    pub fn host(&self) -> &HeadlessInterface {
        &self.host
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Apply one step. Returns whether it changed anything.
    pub fn apply(&mut self, step: Step) -> Result<bool> {
        let applied = match step {
            Step::Open => {
                let window = self.host.open_window();
                let tree = self.output.active_tree_mut()?;
                let placement = tree.allocate_position(WindowSpecification::default());
                debug!(?placement, "Placing {window}");
                tree.advise_new_window(window);
                true
            }
            Step::Close => match self.output.active_window()? {
                Some(window) => {
                    self.output.advise_delete_window(window);
                    self.host.close_window(window);
                    true
                }
                None => false,
            },
            Step::Float => self.output.request_toggle_active_float()?,
            Step::Workspace(number) => {
                self.output.advise_new_workspace(number);
                self.output.advise_workspace_active(number)?
            }
            Step::Command(command) => self.output.execute(command)?,
        };
        debug!(%step, applied, "Step done");
        self.outcomes.push(StepOutcome {
            step: step.to_string(),
            applied,
        });
        Ok(applied)
    }

    pub fn report(&self) -> Result<Report> {
        let workspace = self.output.active_workspace()?;
        let tree = workspace.tree();
        Ok(Report {
            output: self.output.area(),
            workspace: self.output.active_workspace_number(),
            mode: tree.mode(),
            default_direction: tree.options().default_direction,
            windows: tree.layout_snapshot(),
            floating: workspace.floating_windows().to_vec(),
            steps: self.outcomes.clone(),
        })
    }
}

/// Parse and apply `steps` in order on a fresh output of `size`.
pub fn run(size: Size, options: TilingOptions, steps: &[String]) -> Result<Report> {
    let parsed = steps
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            raw.parse::<Step>()
                .map_err(|e| QuiltError::Other(format!("step {}: {e}", i + 1)))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut scenario = Scenario::new(size, options)?;
    for step in parsed {
        scenario.apply(step)?;
    }
    let report = scenario.report()?;
    info!(
        "Replayed {} steps, {} windows tiled",
        report.steps.len(),
        report.windows.len()
    );
    Ok(report)
}
