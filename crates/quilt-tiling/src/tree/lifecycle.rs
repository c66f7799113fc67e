//! Window lifecycle and output changes: allocation, attach, delete, focus
//! advice, fullscreen advice, hide/show, and output geometry.

use quilt_common::types::{Rectangle, WindowId, WindowState};
use tracing::debug;

use crate::node::NodeKey;

use super::{TilingMode, TilingWindowTree, WindowSpecification};

impl TilingWindowTree {
    /// Make room for a new window next to the selection and return where it
    /// will go. Repeated calls before `advise_new_window` reuse the same slot.
    pub fn allocate_position(&mut self, requested: WindowSpecification) -> WindowSpecification {
        let leaf = match self.pending.filter(|key| self.graph.is_leaf(*key)) {
            Some(leaf) => leaf,
            None => {
                let leaf = self.place_new_leaf();
                self.pending = Some(leaf);
                leaf
            }
        };
        let area = self
            .graph
            .visible_area_of(leaf, self.graph.get_logical_area(leaf));
        WindowSpecification {
            area: Some(area),
            state: requested.state.or(Some(WindowState::Restored)),
        }
    }

    /// Insert a window-less leaf beside the active one.
    ///
    /// The leaf goes into the active leaf's lane when that lane runs along
    /// the default axis or holds a single child; otherwise the active leaf
    /// is wrapped in a new lane on the default axis.
    fn place_new_leaf(&mut self) -> NodeKey {
        let leaf = self.graph.insert_leaf(None);
        let axis = self.options.default_direction;
        let Some(active) = self.active_leaf() else {
            self.graph.insert_child(self.root, leaf, None);
            return leaf;
        };
        let (Some(lane), Some(index)) = (self.graph.parent(active), self.graph.index_in_parent(active))
        else {
            self.graph.insert_child(self.root, leaf, None);
            return leaf;
        };
        if self.graph.axis(lane) == Some(axis) || self.graph.children(lane).len() < 2 {
            self.graph.insert_child(lane, leaf, Some(index + 1));
        } else {
            let wrapper = self.graph.wrap_in_lane(active, axis);
            self.graph.insert_child(wrapper, leaf, None);
        }
        leaf
    }

    /// Attach a realised window to the slot made by `allocate_position`
    /// (allocating one now if there is none) and select it.
    pub fn advise_new_window(&mut self, window: WindowId) -> NodeKey {
        let leaf = match self.pending.take().filter(|key| self.graph.is_leaf(*key)) {
            Some(leaf) => leaf,
            None => self.place_new_leaf(),
        };
        self.graph.attach_window(leaf, window);
        self.graph.restage(leaf);
        self.active = Some(leaf);
        self.commit();
        self.select_on_host(leaf);
        debug!("Tiled {window}");
        leaf
    }

    /// Give back the slot reserved by `allocate_position` when its window
    /// will never arrive. Returns false when nothing was reserved.
    pub fn cancel_allocation(&mut self) -> bool {
        let Some(leaf) = self.pending.take().filter(|key| self.graph.is_leaf(*key)) else {
            return false;
        };
        let affected = match self.graph.parent(leaf) {
            Some(lane) => self.graph.remove_child(lane, leaf),
            None => self.root,
        };
        self.graph.remove(leaf);
        self.graph.commit(affected, self.interface.as_ref());
        debug!("Cancelled pending allocation");
        true
    }

    /// Remove the leaf holding `window`. When it was selected, the previous
    /// sibling (or else the next) takes the selection.
    pub fn advise_delete_window(&mut self, window: WindowId) -> bool {
        let Some(leaf) = self.graph.leaf_for_window(window) else {
            return false;
        };
        let Some(lane) = self.graph.parent(leaf) else {
            return false;
        };
        let siblings = self.graph.children(lane).to_vec();
        let index = siblings.iter().position(|k| *k == leaf).unwrap_or(0);
        let replacement = match index.checked_sub(1) {
            Some(previous) => siblings.get(previous).map(|k| (*k, true)),
            None => siblings.get(index + 1).map(|k| (*k, false)),
        };

        let affected = self.graph.remove_child(lane, leaf);
        self.graph.remove(leaf);
        if self.fullscreen == Some(leaf) {
            self.fullscreen = None;
        }

        let was_active = self.active == Some(leaf);
        if was_active {
            self.active = replacement.and_then(|(sibling, from_before)| {
                let subtree = if self.graph.contains(sibling) {
                    sibling
                } else {
                    affected
                };
                let leaves = self.graph.leaves(subtree);
                if from_before {
                    leaves.last().copied()
                } else {
                    leaves.first().copied()
                }
            });
            if self.active.is_none() {
                self.mode = TilingMode::Normal;
            }
        }

        self.graph.commit(affected, self.interface.as_ref());
        if let Some(active) = self.active.filter(|_| was_active) {
            self.select_on_host(active);
        }
        debug!("Removed {window} from tree");
        true
    }

    pub fn advise_focus_gained(&mut self, window: WindowId) {
        self.active = self.graph.leaf_for_window(window);
    }

    pub fn advise_focus_lost(&mut self, window: WindowId) {
        if self.active_window() == Some(window) {
            self.active = None;
        }
    }

    /// The host made `window` fullscreen on its own.
    pub fn advise_fullscreen_window(&mut self, window: WindowId) -> bool {
        let Some(leaf) = self.graph.leaf_for_window(window) else {
            return false;
        };
        if let Some(other) = self.fullscreen.filter(|key| *key != leaf) {
            self.restore_fullscreen_leaf(other);
        }
        self.fullscreen = Some(leaf);
        self.active = Some(leaf);
        self.mode = TilingMode::Normal;
        self.commit();
        self.graph.constrain(leaf, self.interface.as_ref());
        true
    }

    /// The host restored `window`; put it back into its tile.
    pub fn advise_restored_window(&mut self, window: WindowId) -> bool {
        let Some(leaf) = self.graph.leaf_for_window(window) else {
            return false;
        };
        if self.fullscreen == Some(leaf) {
            self.fullscreen = None;
        }
        self.graph.restage(leaf);
        self.commit();
        true
    }

    /// Adjust a placement the host is about to make. Tiled windows being
    /// restored are held to their tile; anything else passes through.
    pub fn confirm_placement_on_display(
        &self,
        window: WindowId,
        state: WindowState,
        proposed: Rectangle,
    ) -> Rectangle {
        match (self.graph.leaf_for_window(window), state) {
            (Some(leaf), WindowState::Restored) => self.graph.get_visible_area(leaf),
            _ => proposed,
        }
    }

    /// Re-clip `window` to its tile. Returns false when it is not tiled here.
    pub fn constrain(&self, window: WindowId) -> bool {
        let Some(leaf) = self.graph.leaf_for_window(window) else {
            return false;
        };
        self.graph.constrain(leaf, self.interface.as_ref());
        true
    }

    /// Hide every window in the tree.
    pub fn hide(&mut self) {
        if self.hidden {
            return;
        }
        for leaf in self.graph.leaves(self.root) {
            self.graph.hide(leaf, self.interface.as_ref());
        }
        self.commit();
        self.hidden = true;
    }

    /// Bring every window back in the state it had before `hide`.
    pub fn show(&mut self) {
        if !self.hidden {
            return;
        }
        for leaf in self.graph.leaves(self.root) {
            self.graph.show(leaf, self.interface.as_ref());
        }
        self.commit();
        self.hidden = false;
    }

    /// Follow an output resize or move by transforming the existing layout.
    pub fn set_output_area(&mut self, area: Rectangle) {
        let previous = self.output_area;
        if previous == area {
            return;
        }
        self.output_area = area;
        if previous.size.width <= 0 || previous.size.height <= 0 {
            self.recalculate_root_node_area();
            return;
        }
        let x_scale = f64::from(area.size.width) / f64::from(previous.size.width);
        let y_scale = f64::from(area.size.height) / f64::from(previous.size.height);
        let origin = Rectangle::new(previous.left(), previous.top(), 0, 0).scaled(x_scale, y_scale);
        self.graph.scale_area(self.root, x_scale, y_scale);
        self.graph
            .translate_by(self.root, area.left() - origin.left(), area.top() - origin.top());
        self.commit();
    }

    /// Scale the whole layout and push it to the host.
    pub fn scale_area(&mut self, x_scale: f64, y_scale: f64) {
        self.graph.scale_area(self.root, x_scale, y_scale);
        self.commit();
    }

    /// Shift the whole layout and push it to the host.
    pub fn translate_by(&mut self, dx: i32, dy: i32) {
        self.graph.translate_by(self.root, dx, dy);
        self.commit();
    }

    pub fn set_application_zones(&mut self, zones: Vec<Rectangle>) {
        self.zones = zones;
    }

    pub fn application_zones(&self) -> &[Rectangle] {
        &self.zones
    }

    /// Fit the root to the output minus reserved zones and lay everything
    /// out again.
    pub fn recalculate_root_node_area(&mut self) {
        let output = self.output_area;
        let usable = self
            .zones
            .iter()
            .find_map(|zone| output.intersection(zone))
            .unwrap_or(output);
        self.graph.set_logical_area(self.root, usable);
        self.commit();
    }

    /// Stage the restored state for a fullscreen leaf and its tile area.
    pub(super) fn restore_fullscreen_leaf(&mut self, leaf: NodeKey) {
        if self.leaf_is_fullscreen(leaf) {
            self.graph.toggle_fullscreen(leaf, self.interface.as_ref());
        }
        self.graph.restage(leaf);
        if self.fullscreen == Some(leaf) {
            self.fullscreen = None;
        }
    }
}
