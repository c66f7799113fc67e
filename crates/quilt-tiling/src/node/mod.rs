//! Arena-backed node graph for the tiling tree.
//!
//! Nodes live in a [`SlotMap`]; a lane owns its children by key and every
//! node keeps its parent key as a back-reference that is only ever used
//! for upward traversal. Leaf-specific operations live in `leaf.rs`,
//! lane layout in `lane.rs`.

mod deferred;
mod lane;
mod leaf;

use slotmap::{new_key_type, SlotMap};

use quilt_common::types::{Direction, LayoutDirection, Rectangle, Size, WindowId};

use crate::interface::TilingInterface;

pub use deferred::Deferred;
pub use lane::ParentNode;
pub use leaf::LeafNode;

new_key_type! {
    /// Key to reference a node in the tiling tree.
    pub struct NodeKey;
}

// =============================================================================
// Gaps and neighbours
// =============================================================================

/// Pixel spacing inserted between adjacent windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gaps {
    pub x: i32,
    pub y: i32,
}

impl Gaps {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Half of the gap on the side facing `direction`, rounded up.
    pub fn half(&self, direction: Direction) -> i32 {
        let gap = match direction.axis() {
            LayoutDirection::Horizontal => self.x,
            LayoutDirection::Vertical => self.y,
        };
        (gap.max(0) + 1) / 2
    }
}

/// Which sides of a node have an adjacent node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Neighbors {
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    fn mark(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
        }
    }

    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|d| self.has(**d)).count()
    }
}

// =============================================================================
// Node
// =============================================================================

#[derive(Debug)]
pub enum NodeKind {
    Leaf(LeafNode),
    Lane(ParentNode),
}

/// A member of the tiling tree: either a single window or a lane.
#[derive(Debug)]
pub struct Node {
    parent: Option<NodeKey>,
    area: Deferred<Rectangle>,
    kind: NodeKind,
}

impl Node {
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// The staged area if one is pending, otherwise the committed one.
    pub fn get_logical_area(&self) -> Rectangle {
        self.area.get()
    }

    pub fn committed_area(&self) -> Rectangle {
        self.area.committed()
    }

    pub fn has_pending_area(&self) -> bool {
        self.area.is_pending()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn is_lane(&self) -> bool {
        matches!(self.kind, NodeKind::Lane(_))
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match &self.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Lane(_) => None,
        }
    }

    pub fn as_lane(&self) -> Option<&ParentNode> {
        match &self.kind {
            NodeKind::Lane(lane) => Some(lane),
            NodeKind::Leaf(_) => None,
        }
    }

    /// The window held by a leaf, if one has been attached.
    pub fn window(&self) -> Option<WindowId> {
        self.as_leaf().and_then(LeafNode::window)
    }
}

// =============================================================================
// NodeGraph
// =============================================================================

/// Owns every node of one tiling tree.
#[derive(Debug)]
pub struct NodeGraph {
    nodes: SlotMap<NodeKey, Node>,
    gaps: Gaps,
    min_size: Size,
}

impl NodeGraph {
    pub fn new(gaps: Gaps, min_size: Size) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            gaps,
            min_size,
        }
    }

    pub fn gaps(&self) -> Gaps {
        self.gaps
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(Node::parent)
    }

    /// Children of a lane; empty for leaves and unknown keys.
    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        match self.nodes.get(key).and_then(Node::as_lane) {
            Some(lane) => lane.children(),
            None => &[],
        }
    }

    pub fn axis(&self, key: NodeKey) -> Option<LayoutDirection> {
        self.nodes.get(key).and_then(Node::as_lane).map(ParentNode::axis)
    }

    pub fn window(&self, key: NodeKey) -> Option<WindowId> {
        self.nodes.get(key).and_then(Node::window)
    }

    pub fn is_leaf(&self, key: NodeKey) -> bool {
        self.nodes.get(key).is_some_and(Node::is_leaf)
    }

    pub fn is_lane(&self, key: NodeKey) -> bool {
        self.nodes.get(key).is_some_and(Node::is_lane)
    }

    pub fn index_in_parent(&self, key: NodeKey) -> Option<usize> {
        let parent = self.parent(key)?;
        self.children(parent).iter().position(|child| *child == key)
    }

    pub fn get_logical_area(&self, key: NodeKey) -> Rectangle {
        self.nodes
            .get(key)
            .map(Node::get_logical_area)
            .unwrap_or_default()
    }

    /// Stage a new logical area. Lanes lay their children out again
    /// proportionally inside the new area.
    pub fn set_logical_area(&mut self, key: NodeKey, area: Rectangle) {
        let Some(node) = self.nodes.get_mut(key) else {
            return;
        };
        node.area.stage(area);
        if node.is_lane() {
            self.relayout(key);
        }
    }

    /// Stage the current area again so the next commit pushes it to the host.
    pub fn restage(&mut self, key: NodeKey) {
        let area = self.get_logical_area(key);
        self.set_logical_area(key, area);
    }

    pub(crate) fn insert_leaf(&mut self, window: Option<WindowId>) -> NodeKey {
        self.nodes.insert(Node {
            parent: None,
            area: Deferred::new(Rectangle::default()),
            kind: NodeKind::Leaf(LeafNode::new(window)),
        })
    }

    pub(crate) fn insert_lane(&mut self, axis: LayoutDirection, area: Rectangle) -> NodeKey {
        self.nodes.insert(Node {
            parent: None,
            area: Deferred::new(area),
            kind: NodeKind::Lane(ParentNode::new(axis)),
        })
    }

    /// Drop a detached node and everything below it.
    pub(crate) fn remove(&mut self, key: NodeKey) {
        let children = self.children(key).to_vec();
        for child in children {
            self.remove(child);
        }
        self.nodes.remove(key);
    }

    fn set_parent(&mut self, key: NodeKey, parent: Option<NodeKey>) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.parent = parent;
        }
    }

    fn leaf_mut(&mut self, key: NodeKey) -> Option<&mut LeafNode> {
        match &mut self.nodes.get_mut(key)?.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Lane(_) => None,
        }
    }

    fn lane_mut(&mut self, key: NodeKey) -> Option<&mut ParentNode> {
        match &mut self.nodes.get_mut(key)?.kind {
            NodeKind::Lane(lane) => Some(lane),
            NodeKind::Leaf(_) => None,
        }
    }

    // -- Traversal --

    /// Every node below and including `key`, in pre-order.
    pub fn descendants(&self, key: NodeKey) -> Vec<NodeKey> {
        let mut out = Vec::new();
        let mut stack = vec![key];
        while let Some(next) = stack.pop() {
            if !self.contains(next) {
                continue;
            }
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// Leaves below and including `key`, in pre-order.
    pub fn leaves(&self, key: NodeKey) -> Vec<NodeKey> {
        self.descendants(key)
            .into_iter()
            .filter(|k| self.is_leaf(*k))
            .collect()
    }

    pub fn leaf_for_window(&self, window: WindowId) -> Option<NodeKey> {
        self.nodes
            .iter()
            .find(|(_, node)| node.window() == Some(window))
            .map(|(key, _)| key)
    }

    /// Sides on which `key` has an adjacent node.
    ///
    /// Siblings in the owning lane count first; missing sides are then
    /// answered by the lane itself, so relations cross lane boundaries.
    pub fn neighbors(&self, key: NodeKey) -> Neighbors {
        let Some(parent) = self.parent(key) else {
            return Neighbors::default();
        };
        let mut neighbors = self.neighbors(parent);
        let (Some(axis), Some(index)) = (self.axis(parent), self.index_in_parent(key)) else {
            return neighbors;
        };
        let (before, after) = match axis {
            LayoutDirection::Horizontal => (Direction::Left, Direction::Right),
            LayoutDirection::Vertical => (Direction::Up, Direction::Down),
        };
        if index > 0 {
            neighbors.mark(before);
        }
        if index + 1 < self.children(parent).len() {
            neighbors.mark(after);
        }
        neighbors
    }

    /// The committed logical area of `key` with half-gaps removed on every
    /// side that has a neighbour.
    pub fn get_visible_area(&self, key: NodeKey) -> Rectangle {
        let area = self
            .nodes
            .get(key)
            .map(Node::committed_area)
            .unwrap_or_default();
        self.visible_area_of(key, area)
    }

    /// Shrink `area` by the half-gaps `key` would have at its position.
    pub fn visible_area_of(&self, key: NodeKey, area: Rectangle) -> Rectangle {
        let neighbors = self.neighbors(key);
        let mut left = area.left();
        let mut top = area.top();
        let mut right = area.right();
        let mut bottom = area.bottom();
        if neighbors.left {
            left += self.gaps.half(Direction::Left);
        }
        if neighbors.right {
            right -= self.gaps.half(Direction::Right);
        }
        if neighbors.up {
            top += self.gaps.half(Direction::Up);
        }
        if neighbors.down {
            bottom -= self.gaps.half(Direction::Down);
        }
        Rectangle::new(left, top, right - left, bottom - top)
    }

    /// Smallest size `key` can be laid out at.
    pub fn floor(&self, key: NodeKey) -> Size {
        let Some(lane) = self.nodes.get(key).and_then(Node::as_lane) else {
            return self.min_size;
        };
        let axis = lane.axis();
        let (along, across) = lane.children().iter().fold((0, 0), |(along, across), child| {
            let floor = self.floor(*child);
            (
                along + floor.extent(axis),
                across.max(floor.extent(axis.perpendicular())),
            )
        });
        match axis {
            LayoutDirection::Horizontal => Size::new(along, across),
            LayoutDirection::Vertical => Size::new(across, along),
        }
    }

    // -- Transforms --

    /// Scale the area of `key` and everything below it around the origin.
    pub fn scale_area(&mut self, key: NodeKey, x_scale: f64, y_scale: f64) {
        for node in self.descendants(key) {
            if let Some(node) = self.nodes.get_mut(node) {
                let scaled = node.area.get().scaled(x_scale, y_scale);
                node.area.stage(scaled);
            }
        }
    }

    pub fn translate_by(&mut self, key: NodeKey, dx: i32, dy: i32) {
        for node in self.descendants(key) {
            if let Some(node) = self.nodes.get_mut(node) {
                let moved = node.area.get().translated(dx, dy);
                node.area.stage(moved);
            }
        }
    }

    // -- Commit --

    /// Apply every staged change below and including `key`.
    pub fn commit(&mut self, key: NodeKey, host: &dyn TilingInterface) {
        if self.is_leaf(key) {
            self.commit_leaf(key, host);
            return;
        }
        if let Some(node) = self.nodes.get_mut(key) {
            node.area.apply();
        }
        for child in self.children(key).to_vec() {
            self.commit(child, host);
        }
    }
}
