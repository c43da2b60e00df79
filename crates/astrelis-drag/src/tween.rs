//! Tween animator for the element's visual transform.
//!
//! The logical position always jumps straight to its new value; only the
//! rendered position eases toward it. Durations scale with travel distance so
//! short corrections feel instant and long programmatic jumps visibly glide.

use std::time::Duration;

use glam::Vec2;

/// Distance (in pixels) that takes exactly the configured base duration.
const REFERENCE_DISTANCE: f32 = 100.0;

/// Upper bound on the distance scale, so very long jumps stay responsive.
const MAX_DURATION_SCALE: f32 = 4.0;

/// Easing curves for position tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    #[default]
    CubicOut,
    CubicInOut,
}

impl Easing {
    /// Map normalized time `t` in `[0, 1]` to eased progress.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let t = 2.0 * t - 2.0;
                    0.5 * t * t * t + 1.0
                }
            }
        }
    }
}

/// Base duration and easing for programmatic moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenConfig {
    /// Duration of a [`REFERENCE_DISTANCE`] move.
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(150),
            easing: Easing::CubicOut,
        }
    }
}

impl TweenConfig {
    /// Tweening disabled: every move is applied immediately.
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Duration of a move covering `distance` pixels.
    pub fn duration_for(&self, distance: f32) -> Duration {
        if !distance.is_finite() || distance <= 0.0 {
            return Duration::ZERO;
        }
        let scale = (distance / REFERENCE_DISTANCE).min(MAX_DURATION_SCALE);
        self.duration.mul_f32(scale)
    }
}

/// A 2D value easing from where it is rendered now toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionTween {
    from: Vec2,
    to: Vec2,
    current: Vec2,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl PositionTween {
    /// A settled tween resting at `position`.
    pub fn new(position: Vec2) -> Self {
        Self {
            from: position,
            to: position,
            current: position,
            elapsed: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Start easing from the current rendered value toward `target`.
    ///
    /// A zero duration snaps immediately.
    pub fn retarget(&mut self, target: Vec2, duration: Duration, easing: Easing) {
        self.from = self.current;
        self.to = target;
        self.elapsed = 0.0;
        self.duration = duration.as_secs_f32();
        self.easing = easing;
        if self.duration <= 0.0 {
            self.current = target;
        }
    }

    /// Advance by `dt` seconds. Returns the new rendered value while animating.
    pub fn update(&mut self, dt: f32) -> Option<Vec2> {
        if !self.is_active() {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let t = self.elapsed / self.duration;
        self.current = if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, self.easing.apply(t))
        };
        Some(self.current)
    }

    /// Jump to the target, ending any animation.
    pub fn finish(&mut self) -> Vec2 {
        self.current = self.to;
        self.from = self.to;
        self.elapsed = self.duration;
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.current != self.to
    }

    /// The rendered value.
    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }
}
