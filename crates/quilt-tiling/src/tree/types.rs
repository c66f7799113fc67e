//! Core types and constructor for TilingWindowTree.

use std::rc::Rc;

use quilt_common::types::{LayoutDirection, Rectangle, Size, WindowId, WindowState};
use serde::Serialize;

use crate::interface::TilingInterface;
use crate::node::{Gaps, NodeGraph, NodeKey};

/// Layout settings the tree reads but never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingOptions {
    pub gap_x: i32,
    pub gap_y: i32,
    /// Axis along which a new window is placed next to the selected one.
    pub default_direction: LayoutDirection,
    /// Floor every leaf is kept above during redistribution.
    pub min_size: Size,
    /// Pixels per resize step.
    pub resize_jump: i32,
}

impl Default for TilingOptions {
    fn default() -> Self {
        Self {
            gap_x: 10,
            gap_y: 10,
            default_direction: LayoutDirection::Horizontal,
            min_size: Size::new(50, 50),
            resize_jump: 50,
        }
    }
}

/// Whether directional commands navigate or resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TilingMode {
    #[default]
    Normal,
    Resize,
}

/// Placement request and answer exchanged with the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowSpecification {
    pub area: Option<Rectangle>,
    pub state: Option<WindowState>,
}

/// One tiled window as the host would currently see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeafSnapshot {
    pub window: Option<WindowId>,
    pub logical: Rectangle,
    pub visible: Rectangle,
    pub active: bool,
    pub fullscreen: bool,
}

/// Owns one workspace's tiling layout and drives the host through
/// [`TilingInterface`].
pub struct TilingWindowTree {
    pub(super) graph: NodeGraph,
    pub(super) root: NodeKey,
    pub(super) interface: Rc<dyn TilingInterface>,
    pub(super) options: TilingOptions,
    /// The selected leaf.
    pub(super) active: Option<NodeKey>,
    pub(super) mode: TilingMode,
    /// The leaf currently covering the output, if any.
    pub(super) fullscreen: Option<NodeKey>,
    /// Leaf reserved by `allocate_position` and not yet given a window.
    pub(super) pending: Option<NodeKey>,
    pub(super) hidden: bool,
    pub(super) output_area: Rectangle,
    pub(super) zones: Vec<Rectangle>,
}

impl TilingWindowTree {
    pub fn new(
        output_area: Rectangle,
        interface: Rc<dyn TilingInterface>,
        options: TilingOptions,
    ) -> Self {
        let mut graph = NodeGraph::new(Gaps::new(options.gap_x, options.gap_y), options.min_size);
        let root = graph.insert_lane(options.default_direction, output_area);
        Self {
            graph,
            root,
            interface,
            options,
            active: None,
            mode: TilingMode::Normal,
            fullscreen: None,
            pending: None,
            hidden: false,
            output_area,
            zones: Vec::new(),
        }
    }

    // -- Accessors --

    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn options(&self) -> &TilingOptions {
        &self.options
    }

    pub fn active(&self) -> Option<NodeKey> {
        self.active
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active.and_then(|key| self.graph.window(key))
    }

    pub fn mode(&self) -> TilingMode {
        self.mode
    }

    pub fn is_resizing(&self) -> bool {
        self.mode == TilingMode::Resize
    }

    pub fn has_fullscreen_window(&self) -> bool {
        self.fullscreen.is_some()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// No leaf holds a window. A slot reserved by `allocate_position` does
    /// not count.
    pub fn is_empty(&self) -> bool {
        self.graph
            .leaves(self.root)
            .iter()
            .all(|leaf| self.graph.window(*leaf).is_none())
    }

    pub fn output_area(&self) -> Rectangle {
        self.output_area
    }

    // -- Internal helpers --

    /// Push every staged change to the host.
    pub(super) fn commit(&mut self) {
        self.graph.commit(self.root, self.interface.as_ref());
    }

    /// Ask the host to focus the window held by `leaf`.
    pub(super) fn select_on_host(&self, leaf: NodeKey) {
        let Some(window) = self.graph.window(leaf) else {
            return;
        };
        if let Err(e) = self.interface.select_active_window(window) {
            tracing::warn!("Failed to select {window}: {e}");
        }
    }

    pub(super) fn leaf_is_fullscreen(&self, leaf: NodeKey) -> bool {
        self.graph
            .window(leaf)
            .is_some_and(|window| self.interface.is_fullscreen(window))
    }

    /// The active leaf, provided it is still in the graph.
    pub(super) fn active_leaf(&self) -> Option<NodeKey> {
        self.active.filter(|key| self.graph.is_leaf(*key))
    }
}
