//! Bounds resolution: turn a [`BoundsSpec`] into a concrete rectangle.
//!
//! Static specs resolve once. Element-backed specs keep the container and a
//! resize observer on it, and recompute the cached rect at drag-start and
//! whenever the container resizes.

use glam::Vec2;

use crate::error::{DragError, DragResult};
use crate::geometry::{Insets, VirtualRect, clamp_f32};
use crate::host::{DragHost, NodeId, ObserverId};

/// Where the dragged element is allowed to go.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BoundsSpec {
    /// No boundary.
    #[default]
    None,
    /// A fixed rectangle in client coordinates.
    Rect(VirtualRect),
    /// Distances inward from the edges of the root container.
    ///
    /// Unlike [`BoundsSpec::Rect`], the root is observed and the rect follows
    /// its resizes.
    Insets(Insets),
    /// The root container.
    Body,
    /// The dragged element's layout parent.
    Parent,
    /// The first element matching a selector.
    Selector(String),
    /// An explicit element.
    Element(NodeId),
}

impl BoundsSpec {
    pub fn selector(selector: impl Into<String>) -> Self {
        BoundsSpec::Selector(selector.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BoundsSource {
    Unbounded,
    Static,
    Tracked {
        container: NodeId,
        insets: Insets,
        observer: Option<ObserverId>,
    },
}

/// A resolved boundary with its cached rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsResolver {
    source: BoundsSource,
    cached: VirtualRect,
}

impl BoundsResolver {
    pub fn unbounded() -> Self {
        Self {
            source: BoundsSource::Unbounded,
            cached: VirtualRect::UNBOUNDED,
        }
    }

    /// Resolve `spec` for the element `node`.
    ///
    /// Fails with [`DragError::BoundsNotFound`] if an element-backed spec
    /// matches nothing. On success, element-backed bounds are observed for
    /// resizes until [`BoundsResolver::dispose`].
    pub fn resolve<H: DragHost + ?Sized>(
        spec: &BoundsSpec,
        node: NodeId,
        host: &mut H,
    ) -> DragResult<Self> {
        let (container, insets) = match spec {
            BoundsSpec::None => return Ok(Self::unbounded()),
            BoundsSpec::Rect(rect) => {
                return Ok(Self {
                    source: BoundsSource::Static,
                    cached: *rect,
                });
            }
            BoundsSpec::Insets(insets) => (host.root(), *insets),
            BoundsSpec::Body => (host.root(), Insets::default()),
            BoundsSpec::Parent => {
                let parent = host
                    .parent(node)
                    .ok_or_else(|| DragError::BoundsNotFound("parent".to_string()))?;
                (parent, Insets::default())
            }
            BoundsSpec::Selector(selector) => {
                let found = host
                    .query(selector, host.root())
                    .into_iter()
                    .next()
                    .ok_or_else(|| DragError::BoundsNotFound(selector.clone()))?;
                (found, Insets::default())
            }
            BoundsSpec::Element(id) => {
                if !host.exists(*id) {
                    return Err(DragError::BoundsNotFound(format!("{:?}", id)));
                }
                (*id, Insets::default())
            }
        };

        let rect = host
            .rect(container)
            .ok_or_else(|| DragError::BoundsNotFound(format!("{:?}", container)))?;
        let observer = host.observe_resize(container);
        tracing::debug!(
            "Bounds resolved to container {:?} ({:?}), observing as {:?}",
            container,
            rect,
            observer
        );

        Ok(Self {
            source: BoundsSource::Tracked {
                container,
                insets,
                observer: Some(observer),
            },
            cached: insets.resolve(&rect),
        })
    }

    /// The resolved rect as of the last refresh.
    pub fn rect(&self) -> VirtualRect {
        self.cached
    }

    pub fn is_bounded(&self) -> bool {
        !matches!(self.source, BoundsSource::Unbounded)
    }

    pub fn container(&self) -> Option<NodeId> {
        match self.source {
            BoundsSource::Tracked { container, .. } => Some(container),
            _ => None,
        }
    }

    pub fn observer(&self) -> Option<ObserverId> {
        match self.source {
            BoundsSource::Tracked { observer, .. } => observer,
            _ => None,
        }
    }

    /// Re-measure the container. Returns `true` if the rect changed.
    ///
    /// A container that has left the host keeps its last known rect.
    pub fn refresh<H: DragHost + ?Sized>(&mut self, host: &H) -> bool {
        let BoundsSource::Tracked {
            container, insets, ..
        } = self.source
        else {
            return false;
        };
        let Some(rect) = host.rect(container) else {
            tracing::warn!(
                "Bounds container {:?} is gone; keeping last known bounds",
                container
            );
            return false;
        };
        let next = insets.resolve(&rect);
        let changed = next != self.cached;
        self.cached = next;
        changed
    }

    /// Clamp a pointer position so the element it drags stays inside the bounds.
    ///
    /// `node_offset` is the pointer-to-element offset captured at grab time and
    /// `node_size` the element's size.
    pub fn clamp_pointer(&self, pointer: Vec2, node_offset: Vec2, node_size: Vec2) -> Vec2 {
        if !self.is_bounded() {
            return pointer;
        }
        let b = self.cached;
        Vec2::new(
            clamp_f32(
                pointer.x,
                b.left + node_offset.x,
                b.right + node_offset.x - node_size.x,
            ),
            clamp_f32(
                pointer.y,
                b.top + node_offset.y,
                b.bottom + node_offset.y - node_size.y,
            ),
        )
    }

    /// Translation that brings `rect` back inside the bounds.
    pub fn containment_offset(&self, rect: &VirtualRect) -> Vec2 {
        if !self.is_bounded() {
            return Vec2::ZERO;
        }
        self.cached.containment_offset(rect)
    }

    /// Stop observing the container. Safe to call repeatedly.
    pub fn dispose<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        if let BoundsSource::Tracked { observer, .. } = &mut self.source
            && let Some(id) = observer.take()
        {
            host.unobserve(id);
        }
    }
}
