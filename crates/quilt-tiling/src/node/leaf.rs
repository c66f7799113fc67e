//! Leaf nodes: a single tiled window and its transactional state changes.

use quilt_common::types::{WindowId, WindowState};
use tracing::warn;

use crate::interface::TilingInterface;

use super::{NodeGraph, NodeKey};

/// Window-specific part of a leaf node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    window: Option<WindowId>,
    next_state: Option<WindowState>,
    before_hidden: Option<WindowState>,
}

impl LeafNode {
    pub(crate) fn new(window: Option<WindowId>) -> Self {
        Self {
            window,
            next_state: None,
            before_hidden: None,
        }
    }

    pub fn window(&self) -> Option<WindowId> {
        self.window
    }

    pub fn pending_state(&self) -> Option<WindowState> {
        self.next_state
    }

    pub fn state_before_hidden(&self) -> Option<WindowState> {
        self.before_hidden
    }
}

impl NodeGraph {
    pub(crate) fn attach_window(&mut self, key: NodeKey, window: WindowId) {
        if let Some(leaf) = self.leaf_mut(key) {
            leaf.window = Some(window);
        }
    }

    /// Clip the window to its visible area, or lift the clip while it
    /// covers the whole output.
    pub fn constrain(&self, key: NodeKey, host: &dyn TilingInterface) {
        let Some(window) = self.window(key) else {
            return;
        };
        let result = if host.is_fullscreen(window) {
            host.noclip(window)
        } else {
            host.clip(window, self.get_visible_area(key))
        };
        if let Err(e) = result {
            warn!("Failed to constrain {window}: {e}");
        }
    }

    /// Whether the host currently shows the leaf's window maximized.
    pub fn is_fullscreen(&self, key: NodeKey, host: &dyn TilingInterface) -> bool {
        self.window(key)
            .is_some_and(|window| host.get_state(window) == WindowState::Maximized)
    }

    /// Remember the current state and stage the hidden one. A second hide
    /// before `show` overwrites the snapshot.
    pub fn hide(&mut self, key: NodeKey, host: &dyn TilingInterface) {
        let Some(window) = self.window(key) else {
            return;
        };
        let current = host.get_state(window);
        if let Some(leaf) = self.leaf_mut(key) {
            leaf.before_hidden = Some(current);
            leaf.next_state = Some(WindowState::Hidden);
        }
    }

    /// Stage the state saved by the last `hide`, or the current state when
    /// the leaf was never hidden.
    pub fn show(&mut self, key: NodeKey, host: &dyn TilingInterface) {
        let Some(window) = self.window(key) else {
            return;
        };
        let current = host.get_state(window);
        if let Some(leaf) = self.leaf_mut(key) {
            leaf.next_state = Some(leaf.before_hidden.take().unwrap_or(current));
        }
    }

    pub fn toggle_fullscreen(&mut self, key: NodeKey, host: &dyn TilingInterface) {
        let Some(window) = self.window(key) else {
            return;
        };
        let next = if host.is_fullscreen(window) {
            WindowState::Restored
        } else {
            WindowState::Maximized
        };
        if let Some(leaf) = self.leaf_mut(key) {
            leaf.next_state = Some(next);
        }
    }

    /// Push staged state, then staged geometry, to the host.
    pub(super) fn commit_leaf(&mut self, key: NodeKey, host: &dyn TilingInterface) {
        let window = self.window(key);
        let next_state = self.leaf_mut(key).and_then(|leaf| leaf.next_state.take());

        if let (Some(window), Some(state)) = (window, next_state) {
            if let Err(e) = host.change_state(window, state) {
                warn!("Failed to change state of {window} to {state:?}: {e}");
            }
            self.constrain(key, host);
        }

        let previous = self.get_visible_area(key);
        let applied = self
            .nodes
            .get_mut(key)
            .and_then(|node| node.area.apply())
            .is_some();
        let Some(window) = window else {
            return;
        };
        if !applied || host.is_fullscreen(window) {
            return;
        }
        let area = self.get_visible_area(key);
        if let Err(e) = host.set_rectangle(window, previous, area) {
            warn!("Failed to place {window}: {e}");
        }
        self.constrain(key, host);
    }
}
