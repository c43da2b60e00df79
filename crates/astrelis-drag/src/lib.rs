//! Astrelis Drag - pointer-driven drag interactions for UI elements
//!
//! This crate turns a stream of pointer events into a live element position:
//! - Pointer capture lifecycle with handle and cancel zones
//! - Boundaries from rects, insets, the parent, the root or any selector
//! - Hard obstacle collision, clamped per axis
//! - Distance-scaled tweening of the visual transform
//! - Lifecycle events (`dragstart`, `drag`, `dragend`, `update`, `release`)
//!
//! The engine is host-agnostic: it measures and mutates elements through the
//! [`DragHost`] trait. [`Scene`] is a retained in-memory host used by the
//! demos and tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use astrelis_drag::{Axis, BoundsSpec, DragConfig, DragHost, Draggable, PointerEvent, Scene};
//! use glam::Vec2;
//!
//! let mut scene = Scene::new(Vec2::new(800.0, 600.0));
//! let panel = scene.insert(scene.root(), Vec2::new(10.0, 10.0), Vec2::new(200.0, 120.0)).unwrap();
//!
//! let mut drag = Draggable::new(
//!     panel,
//!     DragConfig::new()
//!         .axis(Axis::X)
//!         .bounds(BoundsSpec::Body)
//!         .on_drag(|data| println!("dragged to {:?}", data.offset)),
//!     &mut scene,
//! )?;
//!
//! // Forward host pointer events:
//! drag.handle_pointer_down(&PointerEvent::new(panel, Vec2::new(20.0, 20.0)), &mut scene);
//! drag.handle_pointer_move(&PointerEvent::new(panel, Vec2::new(80.0, 90.0)), &mut scene);
//! drag.handle_pointer_up(&PointerEvent::new(panel, Vec2::new(80.0, 90.0)), &mut scene);
//! assert_eq!(drag.position(), Vec2::new(60.0, 0.0));
//!
//! // Once per animation frame:
//! drag.tick(1.0 / 60.0, &mut scene);
//!
//! drag.dispose(&mut scene);
//! # Ok::<(), astrelis_drag::DragError>(())
//! ```

pub mod bounds;
pub mod collision;
pub mod config;
pub mod draggable;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod profiling;
pub mod rect_tracker;
pub mod scene;
pub mod tween;

pub use bounds::{BoundsResolver, BoundsSpec};
pub use collision::{CollisionMode, Direction, clamp_axis, clamp_delta};
pub use config::{Axis, ClassNames, DragCallbacks, DragConfig, DragConfigPatch, ElementSpec};
pub use draggable::{Draggable, InteractionState, VisualState};
pub use error::{DragError, DragResult};
pub use event::{
    Collision, DragEvent, DragEventData, DragEventKind, PointerButton, PointerEvent,
};
pub use geometry::{Insets, VirtualRect};
pub use host::{Cursor, DragHost, NodeId, ObserverId, PointerId};
pub use rect_tracker::RectTracker;
pub use scene::Scene;
pub use tween::{Easing, PositionTween, TweenConfig};
