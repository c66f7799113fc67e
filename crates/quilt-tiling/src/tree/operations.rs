//! Move, resize, direction, fullscreen, and mode operations on the
//! TilingWindowTree.

use quilt_common::types::{Direction, LayoutDirection, Rectangle};
use tracing::debug;

use crate::commands::TilingCommand;
use crate::node::NodeKey;

use super::{TilingMode, TilingWindowTree};

impl TilingWindowTree {
    /// Move the active window one step in `direction`.
    ///
    /// Siblings swap places. Crossing into a neighbouring lane removes the
    /// window from its own lane and inserts it into that lane on the side it
    /// entered from. Returns false at the edge of the tree.
    pub fn try_move_active_window(&mut self, direction: Direction) -> bool {
        if self.mode == TilingMode::Resize || self.fullscreen.is_some() {
            return false;
        }
        let Some(active) = self.active_leaf() else {
            return false;
        };
        let Some((lane, from, to)) = self.find_adjacent(active, direction) else {
            return false;
        };
        let chain = self.graph.children(lane)[from];
        let sibling = self.graph.children(lane)[to];

        if chain == active && self.graph.is_leaf(sibling) {
            self.graph.move_child(lane, from, to);
            self.commit();
            return true;
        }

        let reference = self.graph.get_logical_area(active);
        let Some(parent) = self.graph.parent(active) else {
            return false;
        };
        self.graph.remove_child(parent, active);

        if self.graph.is_leaf(sibling) {
            let owner = self.graph.parent(sibling).unwrap_or(self.root);
            let index = self.graph.index_in_parent(sibling).unwrap_or(0);
            let index = if direction.is_negative() { index + 1 } else { index };
            self.graph.insert_child(owner, active, Some(index));
        } else {
            // The root absorbs a lone lane sibling and takes over its children.
            let target = if self.graph.contains(sibling) {
                sibling
            } else {
                lane
            };
            self.insert_at_entry(target, active, direction, reference);
        }

        self.commit();
        debug!("Moved active window {direction}");
        true
    }

    /// Insert `leaf` into `lane` on the side it enters from.
    ///
    /// Along the lane's axis that is the near edge. Across it, the leaf goes
    /// in right after the child facing `reference`.
    fn insert_at_entry(
        &mut self,
        lane: NodeKey,
        leaf: NodeKey,
        direction: Direction,
        reference: Rectangle,
    ) {
        let index = if self.graph.axis(lane) == Some(direction.axis()) {
            if direction.is_negative() {
                self.graph.children(lane).len()
            } else {
                0
            }
        } else {
            self.entry_child(lane, direction, reference)
                .map_or(self.graph.children(lane).len(), |facing| facing + 1)
        };
        self.graph.insert_child(lane, leaf, Some(index));
    }

    /// In resize mode, grow (right, down) or shrink (left, up) the active
    /// window along the nearest lane on that axis.
    pub fn try_resize_active_window(&mut self, direction: Direction) -> bool {
        if self.mode != TilingMode::Resize {
            return false;
        }
        let Some(active) = self.active_leaf() else {
            return false;
        };
        let jump = self.options.resize_jump;
        let delta = if direction.is_negative() { -jump } else { jump };

        let mut current = active;
        while let Some(lane) = self.graph.parent(current) {
            if self.graph.axis(lane) == Some(direction.axis()) && self.graph.children(lane).len() > 1 {
                if !self.graph.resize_child(lane, current, delta) {
                    return false;
                }
                self.commit();
                return true;
            }
            current = lane;
        }
        false
    }

    /// Enter or leave resize mode. Entering needs a selected window and no
    /// fullscreen window. Returns whether the mode changed.
    pub fn toggle_resize_mode(&mut self) -> bool {
        match self.mode {
            TilingMode::Resize => {
                self.mode = TilingMode::Normal;
                true
            }
            TilingMode::Normal => {
                if self.active_leaf().is_none() || self.fullscreen.is_some() {
                    return false;
                }
                self.mode = TilingMode::Resize;
                true
            }
        }
    }

    pub fn request_vertical(&mut self) -> bool {
        self.handle_direction_change(LayoutDirection::Vertical)
    }

    pub fn request_horizontal(&mut self) -> bool {
        self.handle_direction_change(LayoutDirection::Horizontal)
    }

    fn handle_direction_change(&mut self, axis: LayoutDirection) -> bool {
        let Some(lane) = self.active_leaf().and_then(|leaf| self.graph.parent(leaf)) else {
            return false;
        };
        if !self.graph.set_axis(lane, axis) {
            return false;
        }
        self.commit();
        true
    }

    /// Toggle the active window between its tile and fullscreen. Any other
    /// fullscreen window is restored first.
    pub fn try_toggle_active_fullscreen(&mut self) -> bool {
        let Some(active) = self.active_leaf() else {
            return false;
        };
        if self.graph.window(active).is_none() {
            return false;
        }
        if let Some(other) = self.fullscreen.filter(|key| *key != active) {
            self.restore_fullscreen_leaf(other);
        }
        if self.leaf_is_fullscreen(active) {
            self.restore_fullscreen_leaf(active);
        } else {
            self.graph.toggle_fullscreen(active, self.interface.as_ref());
            self.fullscreen = Some(active);
        }
        self.mode = TilingMode::Normal;
        self.commit();
        true
    }

    /// Run a bound command. Returns whether it had any effect.
    pub fn execute(&mut self, command: TilingCommand) -> bool {
        match command {
            TilingCommand::Select(direction) => self.try_select_next(direction),
            TilingCommand::Move(direction) => self.try_move_active_window(direction),
            TilingCommand::Resize(direction) => self.try_resize_active_window(direction),
            TilingCommand::ToggleResizeMode => self.toggle_resize_mode(),
            TilingCommand::ToggleFullscreen => self.try_toggle_active_fullscreen(),
            TilingCommand::RequestVertical => self.request_vertical(),
            TilingCommand::RequestHorizontal => self.request_horizontal(),
        }
    }
}
