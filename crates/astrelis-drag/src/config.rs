//! Drag configuration, defaults, and runtime patches.

use glam::{Affine2, Vec2};

use crate::bounds::BoundsSpec;
use crate::collision::CollisionMode;
use crate::error::{DragError, DragResult};
use crate::event::{Collision, DragEventData};
use crate::host::{DragHost, NodeId};
use crate::tween::TweenConfig;

/// Axes along which the element may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Both,
    X,
    Y,
    /// Drag events still fire but the element never moves.
    None,
}

impl Axis {
    pub fn allows_x(&self) -> bool {
        matches!(self, Axis::Both | Axis::X)
    }

    pub fn allows_y(&self) -> bool {
        matches!(self, Axis::Both | Axis::Y)
    }

    /// Zero out the components this axis forbids.
    pub fn mask(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.allows_x() { v.x } else { 0.0 },
            if self.allows_y() { v.y } else { 0.0 },
        )
    }
}

/// One or more elements, named by selector or by id.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementSpec {
    Selector(String),
    Element(NodeId),
    Elements(Vec<NodeId>),
}

impl ElementSpec {
    /// Resolve against the host. Elements that are not currently present are dropped.
    pub fn resolve<H: DragHost + ?Sized>(&self, host: &H, scope: NodeId) -> Vec<NodeId> {
        match self {
            ElementSpec::Selector(selector) => host.query(selector, scope),
            ElementSpec::Element(id) => {
                if host.exists(*id) {
                    vec![*id]
                } else {
                    Vec::new()
                }
            }
            ElementSpec::Elements(ids) => ids.iter().copied().filter(|id| host.exists(*id)).collect(),
        }
    }

    pub fn as_selector(&self) -> Option<&str> {
        match self {
            ElementSpec::Selector(selector) => Some(selector.trim()),
            _ => None,
        }
    }
}

impl From<&str> for ElementSpec {
    fn from(selector: &str) -> Self {
        ElementSpec::Selector(selector.to_string())
    }
}

impl From<String> for ElementSpec {
    fn from(selector: String) -> Self {
        ElementSpec::Selector(selector)
    }
}

impl From<NodeId> for ElementSpec {
    fn from(id: NodeId) -> Self {
        ElementSpec::Element(id)
    }
}

impl From<Vec<NodeId>> for ElementSpec {
    fn from(ids: Vec<NodeId>) -> Self {
        ElementSpec::Elements(ids)
    }
}

/// Classes projected onto the element from the interaction state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Present for the draggable's whole lifetime.
    pub default: String,
    /// Present while a session is moving the element.
    pub dragging: String,
    /// Present once the element has been moved at least once.
    pub dragged: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            default: "draggable".to_string(),
            dragging: "draggable-dragging".to_string(),
            dragged: "draggable-dragged".to_string(),
        }
    }
}

pub type DragCallback = Box<dyn FnMut(&DragEventData)>;
pub type CollisionCallback = Box<dyn FnMut(&Collision)>;

/// Custom transform hook. Returning `None` applies the default translation.
pub type TransformFn = Box<dyn Fn(Vec2) -> Option<Affine2>>;

/// Lifecycle callbacks invoked alongside the dispatched events.
#[derive(Default)]
pub struct DragCallbacks {
    pub on_drag_start: Option<DragCallback>,
    pub on_drag: Option<DragCallback>,
    pub on_drag_end: Option<DragCallback>,
    pub on_collision: Option<CollisionCallback>,
}

impl std::fmt::Debug for DragCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_collision", &self.on_collision.is_some())
            .finish()
    }
}

/// Configuration for a [`crate::Draggable`].
pub struct DragConfig {
    pub bounds: BoundsSpec,
    pub axis: Axis,
    /// Sub-elements allowed to start a drag. `None` means the whole element.
    pub handle: Option<ElementSpec>,
    /// Sub-elements that never start a drag, even inside a handle.
    pub cancel: Option<ElementSpec>,
    /// Elements the dragged element may not overlap. Resolved at every drag-start.
    pub obstacles: Option<ElementSpec>,
    /// Disable text selection for the duration of a drag.
    pub user_select_none: bool,
    /// Ignore pointer-downs from non-primary pointers.
    pub ignore_multitouch: bool,
    pub disabled: bool,
    pub default_position: Vec2,
    /// Snap the translation to multiples of this cell size.
    pub grid: Option<Vec2>,
    pub tween: TweenConfig,
    pub collision_mode: CollisionMode,
    pub classes: ClassNames,
    pub transform: Option<TransformFn>,
    pub callbacks: DragCallbacks,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            bounds: BoundsSpec::None,
            axis: Axis::Both,
            handle: None,
            cancel: None,
            obstacles: None,
            user_select_none: true,
            ignore_multitouch: false,
            disabled: false,
            default_position: Vec2::ZERO,
            grid: None,
            tween: TweenConfig::default(),
            collision_mode: CollisionMode::default(),
            classes: ClassNames::default(),
            transform: None,
            callbacks: DragCallbacks::default(),
        }
    }
}

impl std::fmt::Debug for DragConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragConfig")
            .field("bounds", &self.bounds)
            .field("axis", &self.axis)
            .field("handle", &self.handle)
            .field("cancel", &self.cancel)
            .field("obstacles", &self.obstacles)
            .field("user_select_none", &self.user_select_none)
            .field("ignore_multitouch", &self.ignore_multitouch)
            .field("disabled", &self.disabled)
            .field("default_position", &self.default_position)
            .field("grid", &self.grid)
            .field("tween", &self.tween)
            .field("collision_mode", &self.collision_mode)
            .field("classes", &self.classes)
            .field("transform", &self.transform.is_some())
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(mut self, bounds: BoundsSpec) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn handle(mut self, handle: impl Into<ElementSpec>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    pub fn cancel(mut self, cancel: impl Into<ElementSpec>) -> Self {
        self.cancel = Some(cancel.into());
        self
    }

    pub fn obstacles(mut self, obstacles: impl Into<ElementSpec>) -> Self {
        self.obstacles = Some(obstacles.into());
        self
    }

    pub fn user_select_none(mut self, enabled: bool) -> Self {
        self.user_select_none = enabled;
        self
    }

    pub fn ignore_multitouch(mut self, ignore: bool) -> Self {
        self.ignore_multitouch = ignore;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn default_position(mut self, position: Vec2) -> Self {
        self.default_position = position;
        self
    }

    pub fn grid(mut self, cell: Vec2) -> Self {
        self.grid = Some(cell);
        self
    }

    pub fn tween(mut self, tween: TweenConfig) -> Self {
        self.tween = tween;
        self
    }

    pub fn collision_mode(mut self, mode: CollisionMode) -> Self {
        self.collision_mode = mode;
        self
    }

    pub fn classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }

    pub fn transform(mut self, transform: impl Fn(Vec2) -> Option<Affine2> + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn on_drag_start(mut self, callback: impl FnMut(&DragEventData) + 'static) -> Self {
        self.callbacks.on_drag_start = Some(Box::new(callback));
        self
    }

    pub fn on_drag(mut self, callback: impl FnMut(&DragEventData) + 'static) -> Self {
        self.callbacks.on_drag = Some(Box::new(callback));
        self
    }

    pub fn on_drag_end(mut self, callback: impl FnMut(&DragEventData) + 'static) -> Self {
        self.callbacks.on_drag_end = Some(Box::new(callback));
        self
    }

    pub fn on_collision(mut self, callback: impl FnMut(&Collision) + 'static) -> Self {
        self.callbacks.on_collision = Some(Box::new(callback));
        self
    }
}

/// A typed partial update for a live [`crate::Draggable`].
///
/// `None` leaves a field untouched. For optional config fields the inner
/// `Option` is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragConfigPatch {
    pub bounds: Option<BoundsSpec>,
    pub axis: Option<Axis>,
    pub handle: Option<Option<ElementSpec>>,
    pub cancel: Option<Option<ElementSpec>>,
    pub obstacles: Option<Option<ElementSpec>>,
    pub user_select_none: Option<bool>,
    pub ignore_multitouch: Option<bool>,
    pub disabled: Option<bool>,
    /// Move the element to this logical position.
    pub position: Option<Vec2>,
    pub grid: Option<Option<Vec2>>,
    pub tween: Option<TweenConfig>,
    pub collision_mode: Option<CollisionMode>,
    pub classes: Option<ClassNames>,
}

impl DragConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(mut self, bounds: BoundsSpec) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn handle(mut self, handle: Option<ElementSpec>) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn cancel(mut self, cancel: Option<ElementSpec>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn obstacles(mut self, obstacles: Option<ElementSpec>) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    pub fn grid(mut self, grid: Option<Vec2>) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn tween(mut self, tween: TweenConfig) -> Self {
        self.tween = Some(tween);
        self
    }

    pub fn classes(mut self, classes: ClassNames) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Write every non-interactive field into `config`.
    ///
    /// Bounds, classes and position need host work and are applied by the
    /// draggable itself.
    pub(crate) fn apply_plain(&self, config: &mut DragConfig) {
        if let Some(axis) = self.axis {
            config.axis = axis;
        }
        if let Some(handle) = &self.handle {
            config.handle = handle.clone();
        }
        if let Some(cancel) = &self.cancel {
            config.cancel = cancel.clone();
        }
        if let Some(obstacles) = &self.obstacles {
            config.obstacles = obstacles.clone();
        }
        if let Some(enabled) = self.user_select_none {
            config.user_select_none = enabled;
        }
        if let Some(ignore) = self.ignore_multitouch {
            config.ignore_multitouch = ignore;
        }
        if let Some(disabled) = self.disabled {
            config.disabled = disabled;
        }
        if let Some(grid) = self.grid {
            config.grid = grid;
        }
        if let Some(tween) = self.tween {
            config.tween = tween;
        }
        if let Some(mode) = self.collision_mode {
            config.collision_mode = mode;
        }
    }
}

/// Reject handle/cancel combinations under which no drag could ever start.
pub(crate) fn check_zones<H: DragHost + ?Sized>(
    handle: Option<&ElementSpec>,
    cancel: Option<&ElementSpec>,
    node: NodeId,
    host: &H,
) -> DragResult<()> {
    let Some(cancel) = cancel else {
        return Ok(());
    };

    if let (Some(h), Some(c)) = (handle.and_then(ElementSpec::as_selector), cancel.as_selector())
        && h == c
    {
        return Err(DragError::HandleCancelConflict(h.to_string()));
    }

    let cancel_zones = cancel.resolve(host, node);
    if cancel_zones.iter().any(|zone| host.contains(*zone, node)) {
        return Err(DragError::CancelCoversHandle);
    }

    if let Some(handle) = handle {
        let handles = handle.resolve(host, node);
        let all_cancelled = !handles.is_empty()
            && handles
                .iter()
                .all(|h| cancel_zones.iter().any(|zone| host.contains(*zone, *h)));
        if all_cancelled {
            return Err(DragError::CancelCoversHandle);
        }
    }
    Ok(())
}
