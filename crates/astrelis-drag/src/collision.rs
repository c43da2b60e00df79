//! Obstacle collision clamping.
//!
//! Obstacles are hard constraints: a proposed delta is shortened so the
//! dragged rect stops flush against the nearest obstacle edge in the
//! direction of travel. Each obstacle only tightens the running bound, so the
//! order of `obstacles` does not matter.

use glam::Vec2;

use crate::geometry::VirtualRect;

/// The axis a delta is clamped along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// How the two axes of a move are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// Clamp X against the current rect, then clamp Y against the rect
    /// shifted by the allowed X. A diagonal move can never enter an obstacle.
    #[default]
    Sequential,
    /// Clamp X and Y against the same starting rect. A diagonal move that
    /// starts clear of an obstacle on both axes can slip past its corner.
    Independent,
}

/// Largest part of `delta` along `direction` that keeps `current` clear of every obstacle.
pub fn clamp_axis(
    direction: Direction,
    delta: f32,
    current: &VirtualRect,
    obstacles: &[VirtualRect],
) -> f32 {
    if delta == 0.0 {
        return 0.0;
    }

    let mut allowed = delta;
    for obstacle in obstacles {
        let (in_band, lead, trail, near, far) = match direction {
            Direction::Horizontal => (
                current.overlaps_y(obstacle),
                current.right,
                current.left,
                obstacle.left,
                obstacle.right,
            ),
            Direction::Vertical => (
                current.overlaps_x(obstacle),
                current.bottom,
                current.top,
                obstacle.top,
                obstacle.bottom,
            ),
        };
        if !in_band {
            continue;
        }

        if delta > 0.0 {
            if lead <= near && lead + delta > near {
                allowed = allowed.min(near - lead);
            }
        } else if trail >= far && trail + delta < far {
            allowed = allowed.max(far - trail);
        }
    }
    allowed
}

/// Clamp both components of `delta` against `obstacles`.
pub fn clamp_delta(
    delta: Vec2,
    current: &VirtualRect,
    obstacles: &[VirtualRect],
    mode: CollisionMode,
) -> Vec2 {
    if obstacles.is_empty() {
        return delta;
    }
    let x = clamp_axis(Direction::Horizontal, delta.x, current, obstacles);
    let y_from = match mode {
        CollisionMode::Sequential => current.translate(Vec2::new(x, 0.0)),
        CollisionMode::Independent => *current,
    };
    let y = clamp_axis(Direction::Vertical, delta.y, &y_from, obstacles);
    Vec2::new(x, y)
}
