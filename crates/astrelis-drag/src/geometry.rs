//! Axis-aligned rectangles used by the drag engine.

use glam::{Affine2, Vec2};

/// An axis-aligned rectangle stored as edges.
///
/// Always derived from a measurement or from another rect; `left <= right`
/// and `top <= bottom` hold for every constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl VirtualRect {
    /// A rect covering the whole plane.
    pub const UNBOUNDED: Self = Self {
        left: f32::NEG_INFINITY,
        top: f32::NEG_INFINITY,
        right: f32::INFINITY,
        bottom: f32::INFINITY,
    };

    /// Build a rect from two corners in any order.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Build a rect from its top-left corner and size. Negative sizes collapse to zero.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        let size = size.max(Vec2::ZERO);
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.x,
            bottom: origin.y + size.y,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }

    /// Shift every edge by `delta`.
    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            left: self.left + delta.x,
            top: self.top + delta.y,
            right: self.right + delta.x,
            bottom: self.bottom + delta.y,
        }
    }

    /// Axis-aligned bounding box of this rect under `transform`.
    pub fn transformed(&self, transform: Affine2) -> Self {
        let corners = [
            transform.transform_point2(Vec2::new(self.left, self.top)),
            transform.transform_point2(Vec2::new(self.right, self.top)),
            transform.transform_point2(Vec2::new(self.left, self.bottom)),
            transform.transform_point2(Vec2::new(self.right, self.bottom)),
        ];
        let min = corners.iter().copied().fold(Vec2::INFINITY, Vec2::min);
        let max = corners.iter().copied().fold(Vec2::NEG_INFINITY, Vec2::max);
        Self::from_edges(min.x, min.y, max.x, max.y)
    }

    /// Open-interval overlap on the horizontal axis. Touching edges do not overlap.
    pub fn overlaps_x(&self, other: &Self) -> bool {
        self.left < other.right && other.left < self.right
    }

    /// Open-interval overlap on the vertical axis. Touching edges do not overlap.
    pub fn overlaps_y(&self, other: &Self) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Whether `inner` lies entirely within this rect, edges included.
    pub fn contains_rect(&self, inner: &Self) -> bool {
        inner.left >= self.left
            && inner.top >= self.top
            && inner.right <= self.right
            && inner.bottom <= self.bottom
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// The smallest translation that moves `inner` inside this rect.
    ///
    /// When `inner` is larger than this rect on an axis, its leading edge is
    /// pinned to this rect's leading edge.
    pub fn containment_offset(&self, inner: &Self) -> Vec2 {
        Vec2::new(
            axis_offset(inner.left, inner.right, self.left, self.right),
            axis_offset(inner.top, inner.bottom, self.top, self.bottom),
        )
    }
}

fn axis_offset(start: f32, end: f32, min: f32, max: f32) -> f32 {
    if start < min {
        min - start
    } else if end > max {
        // never push the leading edge past `min`
        (max - end).max(min - start)
    } else {
        0.0
    }
}

/// Clamp without panicking when the range is inverted; `min` wins.
pub(crate) fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Distances measured inward from the edges of a reference rect.
///
/// Missing edges default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

impl Insets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, left: f32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn bottom(mut self, bottom: f32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    /// Shrink `outer` by these insets.
    pub fn resolve(&self, outer: &VirtualRect) -> VirtualRect {
        VirtualRect::from_edges(
            outer.left + self.left.unwrap_or(0.0),
            outer.top + self.top.unwrap_or(0.0),
            outer.right - self.right.unwrap_or(0.0),
            outer.bottom - self.bottom.unwrap_or(0.0),
        )
    }
}
