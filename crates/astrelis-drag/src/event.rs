//! Pointer input consumed by the engine and lifecycle events it emits.

use glam::Vec2;

use crate::geometry::VirtualRect;
use crate::host::{NodeId, PointerId};

/// Pointer buttons, numbered like DOM `PointerEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Usually the left mouse button, or a touch/pen contact.
    #[default]
    Primary,
    /// Usually the middle mouse button.
    Auxiliary,
    /// Usually the right mouse button.
    Secondary,
    Other(u16),
}

impl PointerButton {
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            n => PointerButton::Other(n),
        }
    }
}

/// A pointer event routed to a draggable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    /// Position in the host's client coordinate space.
    pub position: Vec2,
    pub button: PointerButton,
    /// `false` for the second and later fingers of a multi-touch gesture.
    pub is_primary: bool,
    /// The innermost element under the pointer.
    pub target: NodeId,
}

impl PointerEvent {
    /// A primary-button event from the primary pointer.
    pub fn new(target: NodeId, position: Vec2) -> Self {
        Self {
            pointer_id: PointerId(1),
            position,
            button: PointerButton::Primary,
            is_primary: true,
            target,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_pointer(mut self, pointer_id: PointerId, is_primary: bool) -> Self {
        self.pointer_id = pointer_id;
        self.is_primary = is_primary;
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }
}

/// Lifecycle notifications dispatched on the dragged element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    DragStart,
    Drag,
    DragEnd,
    /// The element's position or bounds changed; observers should resync.
    Update,
    /// Pointer capture was released.
    Release,
}

impl DragEventKind {
    /// The DOM-style event name.
    pub fn name(&self) -> &'static str {
        match self {
            DragEventKind::DragStart => "dragstart",
            DragEventKind::Drag => "drag",
            DragEventKind::DragEnd => "dragend",
            DragEventKind::Update => "update",
            DragEventKind::Release => "release",
        }
    }
}

/// Payload carried by every lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEventData {
    /// Logical position of the element.
    pub offset: Vec2,
    /// The draggable element.
    pub root_node: NodeId,
    /// The element the triggering pointer event targeted, if any.
    pub event_target: Option<NodeId>,
    /// The tracked rect at the time of the event.
    pub rect: VirtualRect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub kind: DragEventKind,
    pub data: DragEventData,
}

impl DragEvent {
    pub fn new(kind: DragEventKind, data: DragEventData) -> Self {
        Self { kind, data }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Reported when obstacles shortened a proposed move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub proposed: Vec2,
    pub allowed: Vec2,
}
