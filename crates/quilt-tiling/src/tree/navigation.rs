//! Directional lookup, selection, hit-testing, and tree queries.

use quilt_common::types::{Direction, Point, Rectangle, WindowId};

use crate::node::{Node, NodeKey};

use super::{LeafSnapshot, TilingMode, TilingWindowTree};

impl TilingWindowTree {
    /// Find the nearest ancestor lane along `direction`'s axis in which the
    /// chain leading up from `from` has a sibling in that direction.
    ///
    /// Returns the lane, the index of the chain node and the index of the
    /// sibling.
    pub(super) fn find_adjacent(
        &self,
        from: NodeKey,
        direction: Direction,
    ) -> Option<(NodeKey, usize, usize)> {
        let mut current = from;
        while let Some(lane) = self.graph.parent(current) {
            if self.graph.axis(lane) == Some(direction.axis()) {
                let index = self.graph.index_in_parent(current)?;
                let count = self.graph.children(lane).len();
                let target = if direction.is_negative() {
                    index.checked_sub(1)
                } else {
                    Some(index + 1).filter(|t| *t < count)
                };
                if let Some(target) = target {
                    return Some((lane, index, target));
                }
            }
            current = lane;
        }
        None
    }

    /// Index of the child of `lane` that faces `reference` when entering
    /// the lane travelling in `direction`.
    pub(super) fn entry_child(
        &self,
        lane: NodeKey,
        direction: Direction,
        reference: Rectangle,
    ) -> Option<usize> {
        let children = self.graph.children(lane);
        if children.is_empty() {
            return None;
        }
        let axis = self.graph.axis(lane)?;
        if axis == direction.axis() {
            return Some(if direction.is_negative() {
                children.len() - 1
            } else {
                0
            });
        }
        let center = reference.center(axis);
        let index = children
            .iter()
            .position(|child| {
                let area = self.graph.get_logical_area(*child);
                center < area.start(axis) + area.extent(axis)
            })
            .unwrap_or(children.len() - 1);
        Some(index)
    }

    /// Descend from `node` to the leaf facing `reference`.
    fn descend(&self, node: NodeKey, direction: Direction, reference: Rectangle) -> NodeKey {
        let mut current = node;
        while let Some(index) = self.entry_child(current, direction, reference) {
            current = self.graph.children(current)[index];
        }
        current
    }

    /// Move the selection to the window in `direction`. Returns false at
    /// the edge of the tree, in resize mode, or while a window is
    /// fullscreen.
    pub fn try_select_next(&mut self, direction: Direction) -> bool {
        if self.mode == TilingMode::Resize || self.fullscreen.is_some() {
            return false;
        }
        let Some(active) = self.active_leaf() else {
            return false;
        };
        let Some((lane, _, target)) = self.find_adjacent(active, direction) else {
            return false;
        };
        let sibling = self.graph.children(lane)[target];
        let reference = self.graph.get_logical_area(active);
        let next = self.descend(sibling, direction, reference);
        if !self.graph.is_leaf(next) || self.graph.window(next).is_none() {
            return false;
        }
        self.active = Some(next);
        self.select_on_host(next);
        true
    }

    /// First leaf with a window, in pre-order, whose visible area contains
    /// the point. Nothing is hit while a window covers the output.
    pub fn select_window_from_point(&self, x: i32, y: i32) -> Option<NodeKey> {
        if self.fullscreen.is_some() {
            return None;
        }
        let point = Point::new(x, y);
        self.graph.leaves(self.root).into_iter().find(|leaf| {
            self.graph.window(*leaf).is_some() && self.graph.get_visible_area(*leaf).contains(point)
        })
    }

    /// Visit every node in pre-order, root first.
    pub fn foreach_node(&self, mut visitor: impl FnMut(NodeKey, &Node)) {
        for key in self.graph.descendants(self.root) {
            if let Some(node) = self.graph.get(key) {
                visitor(key, node);
            }
        }
    }

    pub fn find_node(&self, predicate: impl Fn(NodeKey, &Node) -> bool) -> Option<NodeKey> {
        self.graph
            .descendants(self.root)
            .into_iter()
            .find(|key| self.graph.get(*key).is_some_and(|node| predicate(*key, node)))
    }

    pub fn leaves(&self) -> Vec<NodeKey> {
        self.graph.leaves(self.root)
    }

    /// Windows in layout order.
    pub fn windows(&self) -> Vec<WindowId> {
        self.leaves()
            .into_iter()
            .filter_map(|leaf| self.graph.window(leaf))
            .collect()
    }

    pub fn layout_snapshot(&self) -> Vec<LeafSnapshot> {
        self.leaves()
            .into_iter()
            .map(|leaf| LeafSnapshot {
                window: self.graph.window(leaf),
                logical: self.graph.get_logical_area(leaf),
                visible: self.graph.get_visible_area(leaf),
                active: self.active == Some(leaf),
                fullscreen: self.fullscreen == Some(leaf),
            })
            .collect()
    }
}
