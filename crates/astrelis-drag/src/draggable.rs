//! The interaction state machine.
//!
//! A [`Draggable`] owns one element's drag lifecycle: it filters pointer-downs
//! through the handle/cancel/button/multitouch checks, runs the
//! target → bounds → obstacles pipeline on every pointer-move, and releases
//! everything it acquired when the session ends.
//!
//! # Example
//!
//! ```
//! use astrelis_drag::{BoundsSpec, DragConfig, DragHost, Draggable, PointerEvent, Scene};
//! use glam::Vec2;
//!
//! let mut scene = Scene::new(Vec2::new(200.0, 200.0));
//! let panel = scene.insert(scene.root(), Vec2::ZERO, Vec2::new(50.0, 50.0)).unwrap();
//!
//! let mut drag = Draggable::new(panel, DragConfig::new().bounds(BoundsSpec::Body), &mut scene)?;
//! drag.handle_pointer_down(&PointerEvent::new(panel, Vec2::new(10.0, 10.0)), &mut scene);
//! drag.handle_pointer_move(&PointerEvent::new(panel, Vec2::new(510.0, 10.0)), &mut scene);
//! drag.handle_pointer_up(&PointerEvent::new(panel, Vec2::new(510.0, 10.0)), &mut scene);
//!
//! assert_eq!(drag.position(), Vec2::new(150.0, 0.0));
//! # Ok::<(), astrelis_drag::DragError>(())
//! ```

use bitflags::bitflags;
use glam::{Affine2, Vec2};

use crate::bounds::BoundsResolver;
use crate::collision;
use crate::config::{DragConfig, DragConfigPatch, check_zones};
use crate::error::{DragError, DragResult};
use crate::event::{Collision, DragEvent, DragEventData, DragEventKind, PointerButton, PointerEvent};
use crate::geometry::VirtualRect;
use crate::host::{Cursor, DragHost, NodeId, ObserverId, PointerId};
use crate::profiling::{profile_function, profile_scope};
use crate::rect_tracker::RectTracker;
use crate::tween::PositionTween;

/// Whether a drag session is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
}

bitflags! {
    /// Visual state projected onto the element as classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VisualState: u8 {
        /// The element is being moved by an active session.
        const DRAGGING = 1 << 0;
        /// The element has been moved at least once.
        const DRAGGED = 1 << 1;
    }
}

/// Snapshot taken at pointer-down and kept until the session ends.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    pointer_id: PointerId,
    /// Pointer minus logical position.
    click_offset: Vec2,
    saved_cursor: Cursor,
    saved_user_select: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Dragging(DragSession),
}

/// A draggable element.
#[derive(Debug)]
pub struct Draggable {
    node: NodeId,
    config: DragConfig,
    phase: Phase,
    position: Vec2,
    tracker: RectTracker,
    bounds: BoundsResolver,
    obstacles: Vec<VirtualRect>,
    tween: PositionTween,
    visual: VisualState,
    self_observer: Option<ObserverId>,
    /// `DRAGGING` is cleared on the tick after the session ends.
    clear_dragging_on_tick: bool,
    disposed: bool,
}

impl Draggable {
    /// Make `node` draggable.
    ///
    /// Configuration errors (unresolvable bounds, contradictory handle/cancel
    /// zones) are reported here, before any session can start.
    pub fn new<H: DragHost + ?Sized>(
        node: NodeId,
        config: DragConfig,
        host: &mut H,
    ) -> DragResult<Self> {
        if !host.exists(node) {
            return Err(DragError::NodeNotFound(node));
        }
        check_zones(config.handle.as_ref(), config.cancel.as_ref(), node, host)?;
        let bounds = BoundsResolver::resolve(&config.bounds, node, host)?;

        let position = config.default_position;
        let mut draggable = Self {
            node,
            phase: Phase::Idle,
            position,
            tracker: RectTracker::new(VirtualRect::from_origin_size(Vec2::ZERO, Vec2::ZERO)),
            bounds,
            obstacles: Vec::new(),
            tween: PositionTween::new(position),
            visual: VisualState::empty(),
            self_observer: Some(host.observe_resize(node)),
            clear_dragging_on_tick: false,
            disposed: false,
            config,
        };

        host.add_class(node, &draggable.config.classes.default);
        draggable.apply_transform(position, host);
        draggable.tracker = RectTracker::measure(host, node);
        tracing::debug!(
            "Draggable {:?} created at {:?} with bounds {:?}",
            node,
            position,
            draggable.bounds.rect()
        );
        Ok(draggable)
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn state(&self) -> InteractionState {
        match self.phase {
            Phase::Idle => InteractionState::Idle,
            Phase::Dragging(_) => InteractionState::Dragging,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Logical position: where the element is, regardless of any running tween.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position currently rendered by the tween animator.
    pub fn rendered_position(&self) -> Vec2 {
        self.tween.current()
    }

    /// The tracked rect of the element at its logical position.
    pub fn rect(&self) -> VirtualRect {
        self.tracker.current_rect()
    }

    pub fn bounds_rect(&self) -> VirtualRect {
        self.bounds.rect()
    }

    /// Obstacle rects resolved at the last drag-start.
    pub fn obstacle_rects(&self) -> &[VirtualRect] {
        &self.obstacles
    }

    pub fn visual_state(&self) -> VisualState {
        self.visual
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_active()
    }

    /// Try to start a session. Returns `true` if dragging started.
    pub fn handle_pointer_down<H: DragHost + ?Sized>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
    ) -> bool {
        if !self.accepts_pointer_down(event, host) {
            return false;
        }
        self.start_session(event, host);
        true
    }

    /// Move the element toward the pointer.
    pub fn handle_pointer_move<H: DragHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) {
        profile_function!();
        let Phase::Dragging(session) = self.phase else {
            return;
        };
        if event.pointer_id != session.pointer_id {
            return;
        }

        let axis = self.config.axis;
        // offset and size follow the tracked rect, not the grab-time snapshot
        let rect = self.tracker.current_rect();
        let node_offset = session.click_offset + self.position - rect.origin();
        let pointer = self
            .bounds
            .clamp_pointer(event.position, node_offset, rect.size());
        let mut target = pointer - session.click_offset;

        if let Some(cell) = self.config.grid {
            target = snap_to_grid(target, cell);
            let snapped_rect = self.tracker.current_rect().translate(target - self.position);
            target += self.bounds.containment_offset(&snapped_rect);
        }

        let proposed = axis.mask(target - self.position);
        let allowed = if self.obstacles.is_empty() {
            proposed
        } else {
            profile_scope!("obstacles");
            collision::clamp_delta(
                proposed,
                &self.tracker.current_rect(),
                &self.obstacles,
                self.config.collision_mode,
            )
        };
        if allowed != proposed {
            tracing::trace!("Collision shortened {:?} to {:?}", proposed, allowed);
            if let Some(callback) = self.config.callbacks.on_collision.as_mut() {
                callback(&Collision { proposed, allowed });
            }
        }

        self.clear_dragging_on_tick = false;
        self.set_visual(self.visual | VisualState::DRAGGING | VisualState::DRAGGED, host);

        self.position += allowed;
        self.tracker.apply_delta(allowed);
        // an active drag tracks the pointer without lag
        self.tween.retarget(self.position, std::time::Duration::ZERO, self.config.tween.easing);
        self.apply_transform(self.position, host);
        self.emit(DragEventKind::Update, Some(event.target), host);
        self.emit(DragEventKind::Drag, Some(event.target), host);
    }

    /// End the session, keeping the element where it is.
    pub fn handle_pointer_up<H: DragHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) {
        self.end_session(event, host);
    }

    /// Same as pointer-up: the position at cancel time is final.
    pub fn handle_pointer_cancel<H: DragHost + ?Sized>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
    ) {
        self.end_session(event, host);
    }

    /// Advance one animation frame by `dt` seconds.
    ///
    /// Returns `true` while the tween still needs frames.
    pub fn tick<H: DragHost + ?Sized>(&mut self, dt: f32, host: &mut H) -> bool {
        if self.disposed {
            return false;
        }
        if self.clear_dragging_on_tick {
            self.clear_dragging_on_tick = false;
            self.set_visual(self.visual - VisualState::DRAGGING, host);
        }
        if let Some(rendered) = self.tween.update(dt) {
            self.apply_transform(rendered, host);
            self.emit(DragEventKind::Update, None, host);
        }
        self.tween.is_active()
    }

    /// Move the element programmatically.
    ///
    /// The logical position changes at once (clamped into the bounds); the
    /// visual transform tweens there over a distance-scaled duration.
    pub fn set_position<H: DragHost + ?Sized>(&mut self, position: Vec2, host: &mut H) {
        if self.disposed {
            return;
        }
        let mut delta = position - self.position;
        let moved = self.tracker.current_rect().translate(delta);
        delta += self.bounds.containment_offset(&moved);

        self.position += delta;
        self.tracker.apply_delta(delta);
        if let Phase::Dragging(session) = &mut self.phase {
            // keep the element under the pointer's grab point on the next move
            session.click_offset -= delta;
        }

        let distance = self.tween.current().distance(self.position);
        let duration = self.config.tween.duration_for(distance);
        self.tween
            .retarget(self.position, duration, self.config.tween.easing);
        if !self.tween.is_active() {
            self.apply_transform(self.position, host);
            self.emit(DragEventKind::Update, None, host);
        }
        tracing::debug!(
            "Draggable {:?} moved to {:?} over {:?}",
            self.node,
            self.position,
            duration
        );
    }

    /// React to a resize notification from the host.
    ///
    /// Returns `true` if the observer belongs to this draggable.
    pub fn handle_resize<H: DragHost + ?Sized>(&mut self, observer: ObserverId, host: &mut H) -> bool {
        if self.disposed {
            return false;
        }
        if self.self_observer == Some(observer) {
            self.tracker.refresh(host, self.node);
            // the live rect includes any in-flight tween offset
            self.tracker
                .apply_delta(self.position - self.tween.current());
            self.emit(DragEventKind::Update, None, host);
            return true;
        }
        if self.bounds.observer() == Some(observer) {
            if self.bounds.refresh(host) {
                tracing::debug!("Bounds for {:?} resized to {:?}", self.node, self.bounds.rect());
                self.emit(DragEventKind::Update, None, host);
            }
            return true;
        }
        false
    }

    /// Reconfigure in place. Takes effect on the next interaction.
    ///
    /// On error nothing is changed. A disposed draggable ignores patches.
    pub fn update_config<H: DragHost + ?Sized>(
        &mut self,
        patch: DragConfigPatch,
        host: &mut H,
    ) -> DragResult<()> {
        if self.disposed {
            tracing::debug!("Reconfiguration of disposed {:?} ignored", self.node);
            return Ok(());
        }
        let handle = match &patch.handle {
            Some(handle) => handle.as_ref(),
            None => self.config.handle.as_ref(),
        };
        let cancel = match &patch.cancel {
            Some(cancel) => cancel.as_ref(),
            None => self.config.cancel.as_ref(),
        };
        check_zones(handle, cancel, self.node, host)?;

        if let Some(spec) = &patch.bounds {
            let resolved = BoundsResolver::resolve(spec, self.node, host)?;
            self.bounds.dispose(host);
            self.bounds = resolved;
            self.config.bounds = spec.clone();
        }

        if let Some(classes) = &patch.classes {
            let old = std::mem::replace(&mut self.config.classes, classes.clone());
            for (flag, old_class, new_class) in [
                (None, &old.default, &classes.default),
                (Some(VisualState::DRAGGING), &old.dragging, &classes.dragging),
                (Some(VisualState::DRAGGED), &old.dragged, &classes.dragged),
            ] {
                if flag.is_none_or(|f| self.visual.contains(f)) {
                    host.remove_class(self.node, old_class);
                    host.add_class(self.node, new_class);
                }
            }
        }

        patch.apply_plain(&mut self.config);

        if let Some(position) = patch.position {
            self.set_position(position, host);
        }
        tracing::debug!("Draggable {:?} reconfigured", self.node);
        Ok(())
    }

    /// Release every listener, observer and class this draggable holds.
    ///
    /// Calling it again does nothing.
    pub fn dispose<H: DragHost + ?Sized>(&mut self, host: &mut H) {
        if self.disposed {
            return;
        }
        if let Phase::Dragging(session) = self.phase {
            self.release(&session, host);
            self.phase = Phase::Idle;
        }
        self.bounds.dispose(host);
        if let Some(observer) = self.self_observer.take() {
            host.unobserve(observer);
        }
        self.set_visual(VisualState::empty(), host);
        host.remove_class(self.node, &self.config.classes.default);
        self.clear_dragging_on_tick = false;
        self.disposed = true;
        tracing::debug!("Draggable {:?} disposed", self.node);
    }

    fn accepts_pointer_down<H: DragHost + ?Sized>(&self, event: &PointerEvent, host: &H) -> bool {
        if self.disposed || self.config.disabled {
            return false;
        }
        if self.is_dragging() {
            tracing::trace!("Pointer-down ignored: {:?} is already dragging", self.node);
            return false;
        }
        if event.button == PointerButton::Secondary {
            return false;
        }
        if self.config.ignore_multitouch && !event.is_primary {
            return false;
        }
        if !host.contains(self.node, event.target) {
            return false;
        }

        if let Some(handle) = &self.config.handle {
            let handles = handle.resolve(host, self.node);
            if handles.is_empty() {
                tracing::debug!("Handle {:?} matched nothing under {:?}", handle, self.node);
                return false;
            }
            if !handles.iter().any(|h| host.contains(*h, event.target)) {
                return false;
            }
        }

        if let Some(cancel) = &self.config.cancel
            && cancel
                .resolve(host, self.node)
                .iter()
                .any(|zone| host.contains(*zone, event.target))
        {
            tracing::trace!("Pointer-down on {:?} is inside a cancel zone", event.target);
            return false;
        }
        true
    }

    fn start_session<H: DragHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) {
        // settle any running tween so the measurement matches the logical position
        let settled = self.tween.finish();
        self.apply_transform(settled, host);

        self.bounds.refresh(host);
        self.tracker.refresh(host, self.node);
        self.obstacles = self.resolve_obstacles(host);

        host.capture_pointer(self.node, event.pointer_id);
        let saved_cursor = host.cursor(self.node);
        host.set_cursor(self.node, Cursor::Grabbing);
        let saved_user_select = if self.config.user_select_none {
            let previous = host.user_select();
            host.set_user_select(false);
            Some(previous)
        } else {
            None
        };

        self.phase = Phase::Dragging(DragSession {
            pointer_id: event.pointer_id,
            click_offset: event.position - self.position,
            saved_cursor,
            saved_user_select,
        });
        self.clear_dragging_on_tick = false;

        tracing::debug!(
            "Drag started on {:?} at {:?} ({} obstacles)",
            self.node,
            event.position,
            self.obstacles.len()
        );
        self.emit(DragEventKind::DragStart, Some(event.target), host);
    }

    fn end_session<H: DragHost + ?Sized>(&mut self, event: &PointerEvent, host: &mut H) {
        let Phase::Dragging(session) = self.phase else {
            return;
        };
        if event.pointer_id != session.pointer_id {
            return;
        }
        self.phase = Phase::Idle;
        self.release(&session, host);
        self.clear_dragging_on_tick = self.visual.contains(VisualState::DRAGGING);

        tracing::debug!("Drag ended on {:?} at {:?}", self.node, self.position);
        self.emit(DragEventKind::DragEnd, Some(event.target), host);
        self.emit(DragEventKind::Release, Some(event.target), host);
    }

    fn release<H: DragHost + ?Sized>(&self, session: &DragSession, host: &mut H) {
        host.release_pointer(self.node, session.pointer_id);
        host.set_cursor(self.node, session.saved_cursor);
        if let Some(previous) = session.saved_user_select {
            host.set_user_select(previous);
        }
    }

    fn resolve_obstacles<H: DragHost + ?Sized>(&self, host: &H) -> Vec<VirtualRect> {
        let Some(spec) = &self.config.obstacles else {
            return Vec::new();
        };
        let ids = spec.resolve(host, host.root());
        if ids.is_empty() {
            tracing::debug!("Obstacles {:?} matched nothing; dragging unobstructed", spec);
        }
        ids.into_iter()
            .filter(|id| !host.contains(self.node, *id) && !host.contains(*id, self.node))
            .filter_map(|id| host.rect(id))
            .collect()
    }

    fn set_visual<H: DragHost + ?Sized>(&mut self, next: VisualState, host: &mut H) {
        let classes = &self.config.classes;
        for (flag, class) in [
            (VisualState::DRAGGING, &classes.dragging),
            (VisualState::DRAGGED, &classes.dragged),
        ] {
            match (self.visual.contains(flag), next.contains(flag)) {
                (false, true) => host.add_class(self.node, class),
                (true, false) => host.remove_class(self.node, class),
                _ => {}
            }
        }
        self.visual = next;
    }

    fn apply_transform<H: DragHost + ?Sized>(&self, offset: Vec2, host: &mut H) {
        let transform = self
            .config
            .transform
            .as_ref()
            .and_then(|custom| custom(offset))
            .unwrap_or_else(|| Affine2::from_translation(offset));
        host.set_transform(self.node, transform);
    }

    fn emit<H: DragHost + ?Sized>(
        &mut self,
        kind: DragEventKind,
        event_target: Option<NodeId>,
        host: &mut H,
    ) {
        let data = DragEventData {
            offset: self.position,
            root_node: self.node,
            event_target,
            rect: self.tracker.current_rect(),
        };
        host.dispatch(self.node, &DragEvent::new(kind, data));

        let callbacks = &mut self.config.callbacks;
        let callback = match kind {
            DragEventKind::DragStart => callbacks.on_drag_start.as_mut(),
            DragEventKind::Drag => callbacks.on_drag.as_mut(),
            DragEventKind::DragEnd => callbacks.on_drag_end.as_mut(),
            DragEventKind::Update | DragEventKind::Release => None,
        };
        if let Some(callback) = callback {
            callback(&data);
        }
    }
}

fn snap_to_grid(value: Vec2, cell: Vec2) -> Vec2 {
    let snap = |v: f32, c: f32| if c > 0.0 { (v / c).round() * c } else { v };
    Vec2::new(snap(value.x, cell.x), snap(value.y, cell.y))
}
