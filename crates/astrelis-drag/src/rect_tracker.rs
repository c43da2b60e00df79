//! Cached rect of the dragged element.
//!
//! Measuring the live element inside a pointer-move handler forces a layout
//! read per event. The tracker measures once at grab time (and on resize) and
//! otherwise shifts the cached rect by the same deltas applied to the
//! element's logical position.

use glam::Vec2;

use crate::geometry::VirtualRect;
use crate::host::{DragHost, NodeId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectTracker {
    rect: VirtualRect,
}

impl RectTracker {
    pub fn new(rect: VirtualRect) -> Self {
        Self { rect }
    }

    /// Measure `node` through the host. Falls back to an empty rect at the origin.
    pub fn measure<H: DragHost + ?Sized>(host: &H, node: NodeId) -> Self {
        Self::new(
            host.rect(node)
                .unwrap_or_else(|| VirtualRect::from_origin_size(Vec2::ZERO, Vec2::ZERO)),
        )
    }

    pub fn current_rect(&self) -> VirtualRect {
        self.rect
    }

    /// Shift the cached rect without touching layout.
    pub fn apply_delta(&mut self, delta: Vec2) {
        self.rect = self.rect.translate(delta);
    }

    /// Re-measure from the live element. Keeps the cached rect if the node is gone.
    pub fn refresh<H: DragHost + ?Sized>(&mut self, host: &H, node: NodeId) {
        match host.rect(node) {
            Some(rect) => self.rect = rect,
            None => tracing::debug!("Rect refresh skipped: node {:?} is not measurable", node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn test_apply_delta_shifts_all_edges() {
        let mut tracker = RectTracker::new(VirtualRect::from_edges(0.0, 0.0, 50.0, 50.0));
        tracker.apply_delta(Vec2::new(10.0, -5.0));
        assert_eq!(
            tracker.current_rect(),
            VirtualRect::from_edges(10.0, -5.0, 60.0, 45.0)
        );
    }

    #[test]
    fn test_refresh_remeasures_live_element() {
        let mut scene = Scene::new(Vec2::new(400.0, 400.0));
        let node = scene
            .insert(scene.root(), Vec2::new(20.0, 30.0), Vec2::new(50.0, 50.0))
            .unwrap();
        let mut tracker = RectTracker::measure(&scene, node);
        tracker.apply_delta(Vec2::new(100.0, 0.0));

        scene.resize(node, Vec2::new(80.0, 40.0));
        tracker.refresh(&scene, node);
        assert_eq!(
            tracker.current_rect(),
            VirtualRect::from_edges(20.0, 30.0, 100.0, 70.0)
        );
    }

    #[test]
    fn test_refresh_missing_node_keeps_cache() {
        let scene = Scene::new(Vec2::new(400.0, 400.0));
        let mut tracker = RectTracker::new(VirtualRect::from_edges(1.0, 2.0, 3.0, 4.0));
        tracker.refresh(&scene, NodeId(99));
        assert_eq!(tracker.current_rect(), VirtualRect::from_edges(1.0, 2.0, 3.0, 4.0));
    }
}
