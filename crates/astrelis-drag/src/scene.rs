//! Retained in-memory element tree implementing [`DragHost`].
//!
//! Layout boxes are stored in absolute client coordinates. A node's live
//! rect is its layout box under the composed transforms of itself and its
//! ancestors.
//!
//! Selectors are a small subset of CSS: `#id`, `.class`, compounds of those
//! (`.panel.active`), `*`, and comma-separated lists.

use ahash::{AHashMap, AHashSet};
use glam::{Affine2, Vec2};

use crate::event::{DragEvent, DragEventKind};
use crate::geometry::VirtualRect;
use crate::host::{Cursor, DragHost, NodeId, ObserverId, PointerId};

#[derive(Debug)]
struct SceneNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    layout: VirtualRect,
    element_id: Option<String>,
    classes: AHashSet<String>,
    transform: Affine2,
    cursor: Cursor,
}

impl SceneNode {
    fn new(parent: Option<NodeId>, layout: VirtualRect) -> Self {
        Self {
            parent,
            children: Vec::new(),
            layout,
            element_id: None,
            classes: AHashSet::new(),
            transform: Affine2::IDENTITY,
            cursor: Cursor::Default,
        }
    }
}

/// An in-memory element tree with recorded side effects.
#[derive(Debug)]
pub struct Scene {
    nodes: AHashMap<NodeId, SceneNode>,
    root: NodeId,
    next_node: usize,
    user_select: bool,
    captures: AHashMap<PointerId, NodeId>,
    observers: AHashMap<ObserverId, NodeId>,
    next_observer: u64,
    events: Vec<(NodeId, DragEvent)>,
}

impl Scene {
    /// Create a scene whose root spans `(0, 0)` to `size`.
    pub fn new(size: Vec2) -> Self {
        let root = NodeId(0);
        let mut nodes = AHashMap::new();
        nodes.insert(
            root,
            SceneNode::new(None, VirtualRect::from_origin_size(Vec2::ZERO, size)),
        );
        Self {
            nodes,
            root,
            next_node: 1,
            user_select: true,
            captures: AHashMap::new(),
            observers: AHashMap::new(),
            next_observer: 1,
            events: Vec::new(),
        }
    }

    /// Insert a child of `parent` with an absolute layout box.
    ///
    /// Returns `None` if `parent` does not exist.
    pub fn insert(&mut self, parent: NodeId, origin: Vec2, size: Vec2) -> Option<NodeId> {
        let parent_node = self.nodes.get_mut(&parent)?;
        let id = NodeId(self.next_node);
        self.next_node += 1;
        parent_node.children.push(id);
        self.nodes.insert(
            id,
            SceneNode::new(Some(parent), VirtualRect::from_origin_size(origin, size)),
        );
        Some(id)
    }

    /// Remove `node` and its subtree. The root cannot be removed.
    pub fn remove(&mut self, node: NodeId) -> bool {
        if node == self.root {
            return false;
        }
        let Some(removed) = self.nodes.remove(&node) else {
            return false;
        };
        if let Some(parent) = removed.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| *child != node);
        }
        let mut stack = removed.children;
        while let Some(child) = stack.pop() {
            if let Some(child_node) = self.nodes.remove(&child) {
                stack.extend(child_node.children);
            }
        }
        self.captures.retain(|_, captured| self.nodes.contains_key(captured));
        self.observers.retain(|_, observed| self.nodes.contains_key(observed));
        true
    }

    pub fn set_element_id(&mut self, node: NodeId, element_id: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.element_id = Some(element_id.into());
        }
    }

    /// Change a node's layout size, returning the observers that should be notified.
    pub fn resize(&mut self, node: NodeId, size: Vec2) -> Vec<ObserverId> {
        let Some(n) = self.nodes.get_mut(&node) else {
            return Vec::new();
        };
        n.layout = VirtualRect::from_origin_size(n.layout.origin(), size);
        self.observers_of(node)
    }

    /// Move a node's layout box (and its subtree) so its top-left is `origin`.
    pub fn move_layout(&mut self, node: NodeId, origin: Vec2) {
        let Some(n) = self.nodes.get(&node) else {
            return;
        };
        let delta = origin - n.layout.origin();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(n) = self.nodes.get_mut(&id) {
                n.layout = n.layout.translate(delta);
                stack.extend(n.children.iter().copied());
            }
        }
    }

    pub fn transform(&self, node: NodeId) -> Option<Affine2> {
        self.nodes.get(&node).map(|n| n.transform)
    }

    pub fn layout_rect(&self, node: NodeId) -> Option<VirtualRect> {
        self.nodes.get(&node).map(|n| n.layout)
    }

    pub fn captured(&self, pointer: PointerId) -> Option<NodeId> {
        self.captures.get(&pointer).copied()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn observers_of(&self, node: NodeId) -> Vec<ObserverId> {
        let mut ids: Vec<ObserverId> = self
            .observers
            .iter()
            .filter(|(_, observed)| **observed == node)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_by_key(|id| id.0);
        ids
    }

    /// All events dispatched so far, in order.
    pub fn events(&self) -> &[(NodeId, DragEvent)] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<(NodeId, DragEvent)> {
        std::mem::take(&mut self.events)
    }

    pub fn count_events(&self, kind: DragEventKind) -> usize {
        self.events.iter().filter(|(_, e)| e.kind == kind).count()
    }

    fn matches(&self, node: &SceneNode, selector: &str) -> bool {
        if selector == "*" {
            return true;
        }
        if !selector.starts_with(['#', '.']) {
            return false;
        }
        let mut rest = selector;
        while !rest.is_empty() {
            let (sigil, body) = rest.split_at(1);
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let (name, tail) = body.split_at(end);
            if name.is_empty() {
                return false;
            }
            let ok = match sigil {
                "#" => node.element_id.as_deref() == Some(name),
                _ => node.classes.contains(name),
            };
            if !ok {
                return false;
            }
            rest = tail;
        }
        true
    }
}

impl DragHost for Scene {
    fn root(&self) -> NodeId {
        self.root
    }

    fn exists(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    fn rect(&self, node: NodeId) -> Option<VirtualRect> {
        let target = self.nodes.get(&node)?;
        let mut transform = target.transform;
        let mut current = target.parent;
        while let Some(id) = current {
            let n = self.nodes.get(&id)?;
            transform = n.transform * transform;
            current = n.parent;
        }
        Some(target.layout.transformed(transform))
    }

    fn query(&self, selector: &str, scope: NodeId) -> Vec<NodeId> {
        let parts: Vec<&str> = selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let mut found = Vec::new();
        if parts.is_empty() || !self.exists(scope) {
            return found;
        }
        let mut stack = vec![scope];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            if parts.iter().any(|part| self.matches(node, part)) {
                found.push(id);
            }
            // reversed so traversal is document order
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    fn set_transform(&mut self, node: NodeId, transform: Affine2) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.transform = transform;
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.classes.remove(class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.contains(class))
    }

    fn cursor(&self, node: NodeId) -> Cursor {
        self.nodes.get(&node).map(|n| n.cursor).unwrap_or_default()
    }

    fn set_cursor(&mut self, node: NodeId, cursor: Cursor) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.cursor = cursor;
        }
    }

    fn user_select(&self) -> bool {
        self.user_select
    }

    fn set_user_select(&mut self, enabled: bool) {
        self.user_select = enabled;
    }

    fn capture_pointer(&mut self, node: NodeId, pointer: PointerId) {
        if self.exists(node) {
            self.captures.insert(pointer, node);
        }
    }

    fn release_pointer(&mut self, node: NodeId, pointer: PointerId) {
        if self.captures.get(&pointer) == Some(&node) {
            self.captures.remove(&pointer);
        }
    }

    fn observe_resize(&mut self, node: NodeId) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.insert(id, node);
        id
    }

    fn unobserve(&mut self, observer: ObserverId) {
        self.observers.remove(&observer);
    }

    fn dispatch(&mut self, node: NodeId, event: &DragEvent) {
        self.events.push((node, *event));
    }
}
