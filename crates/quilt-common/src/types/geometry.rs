//! Integer geometry primitives shared by the tiling core and its hosts.

use serde::{Deserialize, Serialize};

use super::LayoutDirection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The size component along `axis`.
    pub fn extent(&self, axis: LayoutDirection) -> i32 {
        match axis {
            LayoutDirection::Horizontal => self.width,
            LayoutDirection::Vertical => self.height,
        }
    }
}

/// An axis-aligned rectangle in output coordinates.
///
/// Containment is half-open: the right and bottom edges belong to the
/// neighbouring rectangle, so a partition of an area never double-counts
/// a pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub top_left: Point,
    pub size: Size,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            top_left: Point { x, y },
            size: Size { width, height },
        }
    }

    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    pub fn right(&self) -> i32 {
        self.top_left.x + self.size.width
    }

    pub fn bottom(&self) -> i32 {
        self.top_left.y + self.size.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }

    /// True when `other` lies entirely within this rectangle.
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rectangle::new(left, top, right - left, bottom - top))
    }

    /// Start coordinate along `axis`.
    pub fn start(&self, axis: LayoutDirection) -> i32 {
        match axis {
            LayoutDirection::Horizontal => self.left(),
            LayoutDirection::Vertical => self.top(),
        }
    }

    pub fn extent(&self, axis: LayoutDirection) -> i32 {
        self.size.extent(axis)
    }

    /// Centre coordinate along `axis`.
    pub fn center(&self, axis: LayoutDirection) -> i32 {
        self.start(axis) + self.extent(axis) / 2
    }

    /// Copy of this rectangle with the span along `axis` replaced.
    pub fn with_span(&self, axis: LayoutDirection, start: i32, extent: i32) -> Rectangle {
        match axis {
            LayoutDirection::Horizontal => {
                Rectangle::new(start, self.top(), extent, self.size.height)
            }
            LayoutDirection::Vertical => Rectangle::new(self.left(), start, self.size.width, extent),
        }
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rectangle {
        Rectangle::new(self.left() + dx, self.top() + dy, self.size.width, self.size.height)
    }

    /// Scale the rectangle's edges around the origin.
    ///
    /// Edges are rounded independently, so two rectangles that share an edge
    /// before scaling still share it afterwards.
    pub fn scaled(&self, x_scale: f64, y_scale: f64) -> Rectangle {
        let scale = |value: i32, factor: f64| (value as f64 * factor).round() as i32;
        let left = scale(self.left(), x_scale);
        let top = scale(self.top(), y_scale);
        let right = scale(self.right(), x_scale);
        let bottom = scale(self.bottom(), y_scale);
        Rectangle::new(left, top, right - left, bottom - top)
    }
}
