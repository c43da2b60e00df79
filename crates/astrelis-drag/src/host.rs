//! The seam between the drag engine and whatever owns the elements.
//!
//! The engine never measures layout or mutates visuals directly; it asks a
//! [`DragHost`]. [`crate::scene::Scene`] is the in-memory implementation.

use glam::Affine2;

use crate::event::DragEvent;
use crate::geometry::VirtualRect;

/// Identifier of an element in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Handle returned when observing an element for resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Pointer identifier as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Cursor shapes the engine switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Grab,
    Grabbing,
}

/// Everything the drag engine needs from its environment.
pub trait DragHost {
    /// The root container (the "body").
    fn root(&self) -> NodeId;

    fn exists(&self, node: NodeId) -> bool;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Ancestor-or-self test.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Live measurement of an element, visual transform included.
    fn rect(&self, node: NodeId) -> Option<VirtualRect>;

    /// Resolve a selector within `scope` (scope itself included).
    fn query(&self, selector: &str, scope: NodeId) -> Vec<NodeId>;

    fn set_transform(&mut self, node: NodeId, transform: Affine2);

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn cursor(&self, node: NodeId) -> Cursor;

    fn set_cursor(&mut self, node: NodeId, cursor: Cursor);

    /// Whether text selection is currently enabled for the document.
    fn user_select(&self) -> bool;

    fn set_user_select(&mut self, enabled: bool);

    fn capture_pointer(&mut self, node: NodeId, pointer: PointerId);

    fn release_pointer(&mut self, node: NodeId, pointer: PointerId);

    /// Start observing `node` for size changes.
    fn observe_resize(&mut self, node: NodeId) -> ObserverId;

    fn unobserve(&mut self, observer: ObserverId);

    /// Deliver a lifecycle event to listeners on `node`.
    fn dispatch(&mut self, node: NodeId, event: &DragEvent);
}
