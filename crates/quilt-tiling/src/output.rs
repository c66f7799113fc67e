//! Per-output workspace bookkeeping.
//!
//! An output owns a small list of workspaces, each with its own tiling tree,
//! and routes zone and geometry changes to all of them.

use std::rc::Rc;

use quilt_common::errors::TilingError;
use quilt_common::types::{Point, Rectangle, WindowId};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::commands::TilingCommand;
use crate::interface::TilingInterface;
use crate::tree::{TilingOptions, TilingWindowTree, WindowSpecification};

pub type Result<T> = std::result::Result<T, TilingError>;

/// Offset applied to a window's tile when it starts floating.
const FLOAT_OFFSET: i32 = 20;

/// A window kept out of the tiling tree, with the area it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloatingWindow {
    pub window: WindowId,
    pub area: Rectangle,
}

/// One numbered workspace on an output.
pub struct Workspace {
    number: u32,
    tree: TilingWindowTree,
    floating: Vec<FloatingWindow>,
}

impl Workspace {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn tree(&self) -> &TilingWindowTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut TilingWindowTree {
        &mut self.tree
    }

    /// Floating windows, bottom-most first.
    pub fn floating_windows(&self) -> &[FloatingWindow] {
        &self.floating
    }

    pub fn has_floating_window(&self, window: WindowId) -> bool {
        self.floating.iter().any(|f| f.window == window)
    }

    /// Track `window` as floating over `area`, or update its area.
    pub fn add_floating_window(&mut self, window: WindowId, area: Rectangle) {
        match self.floating.iter_mut().find(|f| f.window == window) {
            Some(existing) => existing.area = area,
            None => self.floating.push(FloatingWindow { window, area }),
        }
    }

    pub fn remove_floating_window(&mut self, window: WindowId) -> bool {
        let before = self.floating.len();
        self.floating.retain(|f| f.window != window);
        self.floating.len() != before
    }

    /// No tiled and no floating windows.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty() && self.floating.is_empty()
    }
}

pub struct Output {
    area: Rectangle,
    interface: Rc<dyn TilingInterface>,
    options: TilingOptions,
    workspaces: Vec<Workspace>,
    active_workspace: Option<u32>,
    /// Floating window holding focus; tiled focus lives in each tree.
    focused_floating: Option<WindowId>,
    zones: Vec<Rectangle>,
}

impl Output {
    pub fn new(area: Rectangle, interface: Rc<dyn TilingInterface>, options: TilingOptions) -> Self {
        Self {
            area,
            interface,
            options,
            workspaces: Vec::new(),
            active_workspace: None,
            focused_floating: None,
            zones: Vec::new(),
        }
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn workspace(&self, number: u32) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.number == number)
    }

    pub fn active_workspace_number(&self) -> Option<u32> {
        self.active_workspace
    }

    pub fn application_zones(&self) -> &[Rectangle] {
        &self.zones
    }

    fn index_of(&self, number: u32) -> Result<usize> {
        self.workspaces
            .iter()
            .position(|w| w.number == number)
            .ok_or_else(|| {
                error!("Workspace {number} is not on this output");
                TilingError::WorkspaceNotFound(number)
            })
    }

    fn active_index(&self) -> Result<usize> {
        let number = self.active_workspace.ok_or_else(|| {
            error!("Output has no active workspace");
            TilingError::NoActiveWorkspace
        })?;
        self.index_of(number)
    }

    pub fn active_workspace(&self) -> Result<&Workspace> {
        let index = self.active_index()?;
        Ok(&self.workspaces[index])
    }

    pub fn active_workspace_mut(&mut self) -> Result<&mut Workspace> {
        let index = self.active_index()?;
        Ok(&mut self.workspaces[index])
    }

    pub fn active_tree_mut(&mut self) -> Result<&mut TilingWindowTree> {
        Ok(self.active_workspace_mut()?.tree_mut())
    }

    /// Create workspace `number` on this output. Returns false if it
    /// already exists.
    pub fn advise_new_workspace(&mut self, number: u32) -> bool {
        if self.workspace(number).is_some() {
            return false;
        }
        let mut tree = TilingWindowTree::new(self.area, Rc::clone(&self.interface), self.options);
        if !self.zones.is_empty() {
            tree.set_application_zones(self.zones.clone());
            tree.recalculate_root_node_area();
        }
        self.workspaces.push(Workspace {
            number,
            tree,
            floating: Vec::new(),
        });
        debug!("Workspace {number} created");
        true
    }

    pub fn advise_workspace_deleted(&mut self, number: u32) -> bool {
        let before = self.workspaces.len();
        self.workspaces.retain(|w| w.number != number);
        if self.active_workspace == Some(number) {
            self.active_workspace = None;
        }
        self.workspaces.len() != before
    }

    /// Switch to workspace `number`: hide the previous tree, show the new
    /// one, and drop the previous workspace if nothing is left on it.
    pub fn advise_workspace_active(&mut self, number: u32) -> Result<bool> {
        if self.active_workspace == Some(number) {
            return Ok(false);
        }
        let to = self.index_of(number)?;
        let previous = self.active_workspace;

        if let Some(from) = previous {
            let from = self.index_of(from)?;
            self.workspaces[from].tree.hide();
        }
        self.workspaces[to].tree.show();
        self.active_workspace = Some(number);

        if let Some(from) = previous {
            if self.workspace(from).is_some_and(Workspace::is_empty) {
                self.advise_workspace_deleted(from);
                debug!("Workspace {from} removed once empty");
            }
        }
        Ok(true)
    }

    pub fn advise_application_zone_create(&mut self, zone: Rectangle) {
        self.zones.push(zone);
        self.recalculate_all();
    }

    pub fn advise_application_zone_update(&mut self, updated: Rectangle, original: Rectangle) {
        if let Some(zone) = self.zones.iter_mut().find(|z| **z == original) {
            *zone = updated;
            self.recalculate_all();
        }
    }

    pub fn advise_application_zone_delete(&mut self, zone: Rectangle) {
        let before = self.zones.len();
        self.zones.retain(|z| *z != zone);
        if self.zones.len() != before {
            self.recalculate_all();
        }
    }

    fn recalculate_all(&mut self) {
        for workspace in &mut self.workspaces {
            workspace.tree.set_application_zones(self.zones.clone());
            workspace.tree.recalculate_root_node_area();
        }
    }

    /// The physical output moved or changed size.
    pub fn update_area(&mut self, area: Rectangle) {
        self.area = area;
        for workspace in &mut self.workspaces {
            workspace.tree.set_output_area(area);
        }
    }

    /// Every tiled and floating window on this output.
    pub fn collect_all_windows(&self) -> Vec<WindowId> {
        self.workspaces
            .iter()
            .flat_map(|w| {
                w.tree
                    .windows()
                    .into_iter()
                    .chain(w.floating.iter().map(|f| f.window))
            })
            .collect()
    }

    // -- Focus and floating --

    /// The focused window on the active workspace: a focused floating
    /// window first, else the tree's selection.
    pub fn active_window(&self) -> Result<Option<WindowId>> {
        let workspace = self.active_workspace()?;
        Ok(self
            .focused_floating
            .filter(|w| workspace.has_floating_window(*w))
            .or_else(|| workspace.tree.active_window()))
    }

    /// The host focused `window`.
    pub fn advise_focus_gained(&mut self, window: WindowId) -> Result<()> {
        let workspace = self.active_workspace_mut()?;
        if workspace.has_floating_window(window) {
            self.focused_floating = Some(window);
        } else {
            workspace.tree.advise_focus_gained(window);
            self.focused_floating = None;
        }
        Ok(())
    }

    /// Run a bound command on the active tree. A selection that lands moves
    /// focus off any floating window.
    pub fn execute(&mut self, command: TilingCommand) -> Result<bool> {
        let applied = self.active_tree_mut()?.execute(command);
        if applied && matches!(command, TilingCommand::Select(_)) {
            self.focused_floating = None;
        }
        Ok(applied)
    }

    /// Remove `window` from whichever workspace holds it, tiled or floating.
    pub fn advise_delete_window(&mut self, window: WindowId) -> bool {
        if self.focused_floating == Some(window) {
            self.focused_floating = None;
        }
        for workspace in &mut self.workspaces {
            if workspace.tree.graph().leaf_for_window(window).is_some() {
                return workspace.tree.advise_delete_window(window);
            }
            if workspace.remove_floating_window(window) {
                debug!("Removed floating {window} from workspace {}", workspace.number);
                return true;
            }
        }
        false
    }

    /// Float the active tiled window, or tile the active floating one.
    /// Refused while a window on the workspace is fullscreen.
    pub fn request_toggle_active_float(&mut self) -> Result<bool> {
        let Some(window) = self.active_window()? else {
            warn!("No active window to float");
            return Ok(false);
        };
        let output_area = self.area;
        let interface = Rc::clone(&self.interface);
        let workspace = self.active_workspace_mut()?;

        if workspace.remove_floating_window(window) {
            workspace.tree.allocate_position(WindowSpecification::default());
            workspace.tree.advise_new_window(window);
            self.focused_floating = None;
            debug!("Tiled floating {window}");
            return Ok(true);
        }

        if workspace.tree.has_fullscreen_window() {
            warn!("Cannot float {window} while a window is fullscreen");
            return Ok(false);
        }
        let Some(leaf) = workspace.tree.graph().leaf_for_window(window) else {
            return Ok(false);
        };
        let previous = workspace.tree.graph().get_visible_area(leaf);
        workspace.tree.advise_delete_window(window);

        let area = previous.translated(FLOAT_OFFSET, FLOAT_OFFSET);
        if let Err(e) = interface.set_rectangle(window, previous, area) {
            warn!("Failed to place floating {window}: {e}");
        }
        if let Err(e) = interface.clip(window, output_area) {
            warn!("Failed to clip floating {window}: {e}");
        }
        if let Err(e) = interface.select_active_window(window) {
            warn!("Failed to select {window}: {e}");
        }
        workspace.add_floating_window(window, area);
        self.focused_floating = Some(window);
        debug!("Floated {window}");
        Ok(true)
    }

    /// Focus the window under the point on the active workspace, floating
    /// windows first. Nothing is hit while a window is fullscreen.
    pub fn select_window_from_point(&mut self, x: i32, y: i32) -> Result<Option<WindowId>> {
        let point = Point::new(x, y);
        let active = self.active_window()?;
        let interface = Rc::clone(&self.interface);
        let workspace = self.active_workspace_mut()?;
        if workspace.tree.has_fullscreen_window() {
            return Ok(None);
        }

        let under: Vec<WindowId> = workspace
            .floating
            .iter()
            .filter(|f| f.area.contains(point))
            .map(|f| f.window)
            .collect();
        if let Some(active) = active.filter(|w| under.contains(w)) {
            return Ok(Some(active));
        }
        let hit = match under.last() {
            Some(floating) => {
                self.focused_floating = Some(*floating);
                Some(*floating)
            }
            None => {
                let hit = workspace
                    .tree
                    .select_window_from_point(x, y)
                    .and_then(|leaf| workspace.tree.graph().window(leaf));
                if let Some(window) = hit {
                    workspace.tree.advise_focus_gained(window);
                    self.focused_floating = None;
                }
                hit
            }
        };

        if let Some(window) = hit.filter(|w| Some(*w) != active) {
            if let Err(e) = interface.select_active_window(window) {
                warn!("Failed to select {window}: {e}");
            }
        }
        Ok(hit)
    }
}
