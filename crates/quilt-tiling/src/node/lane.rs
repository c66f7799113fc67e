//! Lanes: ordered children partitioning an area along one axis.
//!
//! Children's current extents act as their weights. Every layout path
//! ends in `place_children`, which stages consecutive areas that exactly
//! cover the lane along its axis.

use quilt_common::types::{LayoutDirection, Rectangle};
use tracing::{debug, warn};

use super::{NodeGraph, NodeKey};

/// Lane-specific part of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    axis: LayoutDirection,
    children: Vec<NodeKey>,
}

impl ParentNode {
    pub(crate) fn new(axis: LayoutDirection) -> Self {
        Self {
            axis,
            children: Vec::new(),
        }
    }

    pub fn axis(&self) -> LayoutDirection {
        self.axis
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Split `extent` in proportion to `weights`, giving the rounding
/// remainder to the trailing entries.
fn proportional(weights: &[i32], extent: i32) -> Vec<i32> {
    let total: i64 = weights.iter().map(|w| i64::from((*w).max(0))).sum();
    if total == 0 {
        return equal(weights.len(), extent);
    }
    let mut sizes: Vec<i32> = weights
        .iter()
        .map(|w| (i64::from((*w).max(0)) * i64::from(extent) / total) as i32)
        .collect();
    let n = sizes.len();
    let remainder = extent - sizes.iter().sum::<i32>();
    for i in 0..remainder.max(0) as usize {
        sizes[n - 1 - (i % n)] += 1;
    }
    sizes
}

/// Split `extent` into `n` equal parts, remainder to the last.
fn equal(n: usize, extent: i32) -> Vec<i32> {
    if n == 0 {
        return Vec::new();
    }
    let share = extent / n as i32;
    let mut sizes = vec![share; n];
    sizes[n - 1] += extent - share * n as i32;
    sizes
}

/// Raise every entry to its floor, taking the deficit from the entries with
/// the most slack. Returns false when the floors cannot all fit, in which
/// case every entry is clamped to its floor.
fn enforce_floors(sizes: &mut [i32], floors: &[i32], extent: i32) -> bool {
    if floors.iter().sum::<i32>() > extent {
        sizes.copy_from_slice(floors);
        return false;
    }
    for i in 0..sizes.len() {
        let mut deficit = floors[i] - sizes[i];
        if deficit <= 0 {
            continue;
        }
        sizes[i] = floors[i];
        while deficit > 0 {
            let donor = (0..sizes.len())
                .filter(|j| *j != i && sizes[*j] > floors[*j])
                .max_by_key(|j| sizes[*j] - floors[*j]);
            let Some(donor) = donor else {
                break;
            };
            let take = deficit.min(sizes[donor] - floors[donor]);
            sizes[donor] -= take;
            deficit -= take;
        }
    }
    true
}

impl NodeGraph {
    fn extents(&self, lane: NodeKey, axis: LayoutDirection) -> Vec<i32> {
        self.children(lane)
            .iter()
            .map(|child| self.get_logical_area(*child).extent(axis))
            .collect()
    }

    /// Apply floors to `sizes` and stage the resulting child areas.
    fn place_children(&mut self, lane: NodeKey, mut sizes: Vec<i32>) {
        let Some(axis) = self.axis(lane) else {
            return;
        };
        let area = self.get_logical_area(lane);
        let floors: Vec<i32> = self
            .children(lane)
            .iter()
            .map(|child| self.floor(*child).extent(axis))
            .collect();
        if !enforce_floors(&mut sizes, &floors, area.extent(axis)) {
            warn!(
                "Lane of {} children cannot honour minimum sizes in {}px; overflowing",
                sizes.len(),
                area.extent(axis)
            );
        }
        let mut start = area.start(axis);
        for (child, size) in self.children(lane).to_vec().into_iter().zip(sizes) {
            self.set_logical_area(child, area.with_span(axis, start, size));
            start += size;
        }
    }

    /// Lay the children out again proportionally inside the lane's area.
    pub(super) fn relayout(&mut self, lane: NodeKey) {
        let Some(axis) = self.axis(lane) else {
            return;
        };
        let extent = self.get_logical_area(lane).extent(axis);
        let sizes = proportional(&self.extents(lane, axis), extent);
        self.place_children(lane, sizes);
    }

    /// Insert `child` at `index` (appended when `None`). The newcomer gets
    /// an equal share; the others shrink proportionally to make room.
    pub fn insert_child(&mut self, lane: NodeKey, child: NodeKey, index: Option<usize>) {
        let Some(axis) = self.axis(lane) else {
            return;
        };
        let extent = self.get_logical_area(lane).extent(axis);
        let existing = self.extents(lane, axis);
        let count = existing.len();
        let index = index.unwrap_or(count).min(count);

        let share = extent / (count as i32 + 1);
        let mut sizes = proportional(&existing, extent - share);
        sizes.insert(index, share);

        self.set_parent(child, Some(lane));
        if let Some(parent) = self.lane_mut(lane) {
            parent.children.insert(index, child);
        }
        self.place_children(lane, sizes);
    }

    /// Detach `child` from `lane`. Returns the lane whose subtree needs
    /// committing.
    ///
    /// A non-root lane left with one child is replaced by that child in
    /// its own parent. A root left holding a single lane absorbs it.
    pub fn remove_child(&mut self, lane: NodeKey, child: NodeKey) -> NodeKey {
        if let Some(parent) = self.lane_mut(lane) {
            parent.children.retain(|c| *c != child);
        }
        self.set_parent(child, None);

        let remaining = self.children(lane).to_vec();
        match (remaining.as_slice(), self.parent(lane)) {
            ([only], Some(grandparent)) => {
                let only = *only;
                let area = self.get_logical_area(lane);
                if let Some(index) = self.index_in_parent(lane) {
                    if let Some(parent) = self.lane_mut(grandparent) {
                        parent.children[index] = only;
                    }
                }
                self.set_parent(only, Some(grandparent));
                if let Some(parent) = self.lane_mut(lane) {
                    parent.children.clear();
                }
                self.nodes.remove(lane);
                self.set_logical_area(only, area);
                debug!("Collapsed single-child lane");
                grandparent
            }
            ([only], None) if self.is_lane(*only) => {
                let only = *only;
                self.absorb(lane, only);
                lane
            }
            _ => {
                self.redistribute_size(lane);
                lane
            }
        }
    }

    /// Take over `inner`'s axis and children, dropping `inner`.
    fn absorb(&mut self, lane: NodeKey, inner: NodeKey) {
        let Some(axis) = self.axis(inner) else {
            return;
        };
        let children = self.children(inner).to_vec();
        for child in &children {
            self.set_parent(*child, Some(lane));
        }
        if let Some(parent) = self.lane_mut(lane) {
            parent.axis = axis;
            parent.children = children;
        }
        self.nodes.remove(inner);
        debug!("Root absorbed its only lane");
        self.redistribute_size(lane);
    }

    /// Share the difference between the lane's extent and its children's
    /// summed extents equally among the children.
    pub fn redistribute_size(&mut self, lane: NodeKey) {
        let Some(axis) = self.axis(lane) else {
            return;
        };
        let mut sizes = self.extents(lane, axis);
        if sizes.is_empty() {
            return;
        }
        let n = sizes.len() as i32;
        let difference = self.get_logical_area(lane).extent(axis) - sizes.iter().sum::<i32>();
        let share = difference / n;
        for size in sizes.iter_mut() {
            *size += share;
        }
        if let Some(last) = sizes.last_mut() {
            *last += difference - share * n;
        }
        self.place_children(lane, sizes);
    }

    /// Move the child at `from` to position `to`; sizes travel with it.
    pub fn move_child(&mut self, lane: NodeKey, from: usize, to: usize) -> bool {
        let Some(parent) = self.lane_mut(lane) else {
            return false;
        };
        if from >= parent.children.len() || to >= parent.children.len() || from == to {
            return false;
        }
        let child = parent.children.remove(from);
        parent.children.insert(to, child);
        self.redistribute_size(lane);
        true
    }

    /// Change the lane's axis and split it equally along the new one.
    pub fn set_axis(&mut self, lane: NodeKey, axis: LayoutDirection) -> bool {
        let Some(parent) = self.lane_mut(lane) else {
            return false;
        };
        if parent.axis == axis {
            return false;
        }
        parent.axis = axis;
        let count = parent.children.len();
        let extent = self.get_logical_area(lane).extent(axis);
        self.place_children(lane, equal(count, extent));
        true
    }

    /// Grow `child` by `delta` pixels along the lane's axis (shrink when
    /// negative), compensating with its next sibling, or the previous one
    /// for the last child. Returns false when floors leave no room.
    pub fn resize_child(&mut self, lane: NodeKey, child: NodeKey, delta: i32) -> bool {
        let Some(axis) = self.axis(lane) else {
            return false;
        };
        let children = self.children(lane).to_vec();
        let Some(index) = children.iter().position(|c| *c == child) else {
            return false;
        };
        if children.len() < 2 {
            return false;
        }
        let sibling = if index + 1 < children.len() {
            index + 1
        } else {
            index - 1
        };

        let mut sizes = self.extents(lane, axis);
        let child_floor = self.floor(children[index]).extent(axis);
        let sibling_floor = self.floor(children[sibling]).extent(axis);
        let lowest = child_floor - sizes[index];
        let highest = sizes[sibling] - sibling_floor;
        if lowest > highest {
            return false;
        }
        let delta = delta.max(lowest).min(highest);
        if delta == 0 {
            return false;
        }
        sizes[index] += delta;
        sizes[sibling] -= delta;
        self.place_children(lane, sizes);
        true
    }

    /// Put `lane` where `child` sits in its parent and move `child` inside.
    pub(crate) fn wrap_in_lane(&mut self, child: NodeKey, axis: LayoutDirection) -> NodeKey {
        let area = self.get_logical_area(child);
        let lane = self.insert_lane(axis, area);
        if let (Some(parent), Some(index)) = (self.parent(child), self.index_in_parent(child)) {
            if let Some(owner) = self.lane_mut(parent) {
                owner.children[index] = lane;
            }
            self.set_parent(lane, Some(parent));
        }
        self.set_parent(child, None);
        self.insert_child(lane, child, None);
        debug!("Created {axis:?} lane");
        lane
    }
}
