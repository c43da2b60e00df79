//! Integration tests driving the drag engine through the in-memory scene.
//!
//! Pointer coordinates are whole pixels so every rect edge stays exact in f32.

use std::cell::RefCell;
use std::rc::Rc;

use astrelis_drag::{
    Axis, BoundsSpec, DragConfig, DragConfigPatch, DragError, DragEventKind, DragHost, Draggable,
    ElementSpec, InteractionState, Insets, NodeId, PointerEvent, PointerId, Scene, TweenConfig,
    VirtualRect,
};
use glam::Vec2;

/// Small deterministic generator for pointer sequences.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// Whole number in `[-range, range]`.
    fn step(&mut self, range: i64) -> f32 {
        (self.next() as i64 % (2 * range + 1) - range) as f32
    }
}

fn scene() -> Scene {
    Scene::new(Vec2::new(800.0, 600.0))
}

fn square(scene: &mut Scene, parent: NodeId, x: f32, y: f32, size: f32) -> NodeId {
    scene
        .insert(parent, Vec2::new(x, y), Vec2::splat(size))
        .unwrap()
}

fn at(node: NodeId, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(node, Vec2::new(x, y))
}

fn event_kinds(scene: &Scene) -> Vec<DragEventKind> {
    scene.events().iter().map(|(_, e)| e.kind).collect()
}

#[test]
fn test_simple_bounded_drag() {
    let mut scene = scene();
    let root = scene.root();
    let arena = square(&mut scene, root, 0.0, 0.0, 200.0);
    let node = square(&mut scene, arena, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new().bounds(BoundsSpec::Parent), &mut scene)
        .unwrap();

    drag.handle_pointer_down(&at(node, 25.0, 25.0), &mut scene);
    drag.handle_pointer_move(&at(node, 525.0, 25.0), &mut scene);

    assert_eq!(drag.position().x, 150.0);
    assert_eq!(scene.rect(node).unwrap().right, 200.0);
}

#[test]
fn test_static_rect_bounds() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let bounds = VirtualRect::from_edges(0.0, 0.0, 200.0, 200.0);
    let mut drag =
        Draggable::new(node, DragConfig::new().bounds(BoundsSpec::Rect(bounds)), &mut scene)
            .unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.handle_pointer_move(&at(node, 500.0, -300.0), &mut scene);
    assert_eq!(drag.position(), Vec2::new(150.0, 0.0));
}

#[test]
fn test_inset_bounds_measure_from_root() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 100.0, 100.0, 50.0);
    let spec = BoundsSpec::Insets(Insets::new().top(60.0).right(100.0));
    let mut drag = Draggable::new(node, DragConfig::new().bounds(spec), &mut scene).unwrap();

    drag.handle_pointer_down(&at(node, 110.0, 110.0), &mut scene);
    drag.handle_pointer_move(&at(node, 2000.0, -2000.0), &mut scene);
    let rect = drag.rect();
    assert_eq!(rect.right, 700.0);
    assert_eq!(rect.top, 60.0);
}

#[test]
fn test_obstacle_blocks_rightward_move() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let wall = scene
        .insert(scene.root(), Vec2::new(150.0, 0.0), Vec2::new(20.0, 50.0))
        .unwrap();
    scene.add_class(wall, "wall");

    let hits = Rc::new(RefCell::new(Vec::new()));
    let sink = hits.clone();
    let mut drag = Draggable::new(
        node,
        DragConfig::new()
            .obstacles(".wall")
            .on_collision(move |c| sink.borrow_mut().push(*c)),
        &mut scene,
    )
    .unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.handle_pointer_move(&at(node, 150.0, 0.0), &mut scene);

    assert_eq!(drag.position().x, 100.0);
    let hits = hits.borrow();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].proposed, Vec2::new(150.0, 0.0));
    assert_eq!(hits[0].allowed, Vec2::new(100.0, 0.0));
}

#[test]
fn test_cancel_zone_never_fires_dragstart() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 100.0);
    let header = scene
        .insert(node, Vec2::ZERO, Vec2::new(100.0, 20.0))
        .unwrap();
    let close = square(&mut scene, header, 80.0, 0.0, 20.0);
    let icon = square(&mut scene, close, 84.0, 4.0, 12.0);
    scene.add_class(header, "header");
    scene.add_class(close, "cancel");

    let mut drag = Draggable::new(
        node,
        DragConfig::new().handle(".header").cancel(".cancel"),
        &mut scene,
    )
    .unwrap();

    assert!(!drag.handle_pointer_down(&at(icon, 90.0, 10.0), &mut scene));
    assert!(!drag.handle_pointer_down(&at(close, 85.0, 2.0), &mut scene));
    assert_eq!(scene.count_events(DragEventKind::DragStart), 0);

    assert!(drag.handle_pointer_down(&at(header, 10.0, 10.0), &mut scene));
    assert_eq!(scene.count_events(DragEventKind::DragStart), 1);
}

#[test]
fn test_handle_gating() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 100.0);
    let grip = square(&mut scene, node, 0.0, 0.0, 10.0);
    let body = square(&mut scene, node, 0.0, 20.0, 50.0);

    let mut drag =
        Draggable::new(node, DragConfig::new().handle(grip), &mut scene).unwrap();

    for target in [node, body] {
        assert!(!drag.handle_pointer_down(&at(target, 30.0, 30.0), &mut scene));
        drag.handle_pointer_move(&at(target, 90.0, 90.0), &mut scene);
        assert_eq!(drag.state(), InteractionState::Idle);
        assert_eq!(drag.position(), Vec2::ZERO);
    }
    assert!(drag.handle_pointer_down(&at(grip, 5.0, 5.0), &mut scene));
}

#[test]
fn test_handle_matching_nothing_blocks_drag_until_it_appears() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 100.0);
    let mut drag = Draggable::new(node, DragConfig::new().handle(".grip"), &mut scene).unwrap();

    assert!(!drag.handle_pointer_down(&at(node, 5.0, 5.0), &mut scene));

    let grip = square(&mut scene, node, 0.0, 0.0, 10.0);
    scene.add_class(grip, "grip");
    assert!(drag.handle_pointer_down(&at(grip, 5.0, 5.0), &mut scene));
}

#[test]
fn test_axis_x_never_changes_y() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 300.0, 300.0, 40.0);
    let mut drag = Draggable::new(node, DragConfig::new().axis(Axis::X), &mut scene).unwrap();
    let mut rng = Lcg(7);

    let mut pointer = Vec2::new(310.0, 310.0);
    drag.handle_pointer_down(&at(node, pointer.x, pointer.y), &mut scene);
    for _ in 0..200 {
        pointer += Vec2::new(rng.step(80), rng.step(200));
        drag.handle_pointer_move(&at(node, pointer.x, pointer.y), &mut scene);
        assert_eq!(drag.position().y, 0.0);
        assert_eq!(drag.rect().top, 300.0);
    }
    drag.handle_pointer_up(&at(node, pointer.x, pointer.y), &mut scene);
    assert_eq!(drag.position().y, 0.0);
}

#[test]
fn test_bounds_containment_under_rapid_moves() {
    let mut scene = scene();
    let root = scene.root();
    let arena = square(&mut scene, root, 100.0, 50.0, 300.0);
    let node = square(&mut scene, arena, 150.0, 100.0, 60.0);
    let mut drag = Draggable::new(node, DragConfig::new().bounds(BoundsSpec::Parent), &mut scene)
        .unwrap();
    let bounds = drag.bounds_rect();
    let mut rng = Lcg(42);

    for round in 0..10 {
        let start = drag.rect().origin() + Vec2::splat(5.0);
        let mut pointer = start;
        drag.handle_pointer_down(&at(node, pointer.x, pointer.y), &mut scene);
        for _ in 0..100 {
            pointer += Vec2::new(rng.step(1000), rng.step(1000));
            drag.handle_pointer_move(&at(node, pointer.x, pointer.y), &mut scene);
            let rect = scene.rect(node).unwrap();
            assert!(
                bounds.contains_rect(&rect),
                "round {}: {:?} escaped {:?}",
                round,
                rect,
                bounds
            );
            assert_eq!(rect, drag.rect());
        }
        drag.handle_pointer_up(&at(node, pointer.x, pointer.y), &mut scene);
    }
}

#[test]
fn test_bounds_containment_with_mid_drag_changes() {
    let mut scene = scene();
    let root = scene.root();
    let arena = square(&mut scene, root, 100.0, 50.0, 300.0);
    let node = square(&mut scene, arena, 150.0, 100.0, 60.0);
    let mut drag = Draggable::new(node, DragConfig::new().bounds(BoundsSpec::Parent), &mut scene)
        .unwrap();
    let mut rng = Lcg(99);

    for round in 0..10 {
        let mut pointer = drag.rect().origin() + Vec2::splat(5.0);
        drag.handle_pointer_down(&at(node, pointer.x, pointer.y), &mut scene);
        for step in 0..150 {
            match rng.next() % 10 {
                0 => {
                    let target = Vec2::new(rng.step(300), rng.step(300));
                    drag.set_position(target, &mut scene);
                }
                1 => {
                    // element stays smaller than the smallest arena
                    let size = Vec2::new(30.0 + rng.step(45) + 45.0, 30.0 + rng.step(45) + 45.0);
                    for observer in scene.resize(node, size) {
                        drag.handle_resize(observer, &mut scene);
                    }
                }
                2 => {
                    let side = 300.0 + rng.step(100);
                    for observer in scene.resize(arena, Vec2::splat(side)) {
                        drag.handle_resize(observer, &mut scene);
                    }
                }
                _ => {
                    pointer += Vec2::new(rng.step(1000), rng.step(1000));
                    drag.handle_pointer_move(&at(node, pointer.x, pointer.y), &mut scene);
                    let rect = scene.rect(node).unwrap();
                    let bounds = drag.bounds_rect();
                    assert!(
                        bounds.contains_rect(&rect),
                        "round {} step {}: {:?} escaped {:?}",
                        round,
                        step,
                        rect,
                        bounds
                    );
                    assert_eq!(rect, drag.rect());
                }
            }
        }
        drag.handle_pointer_up(&at(node, pointer.x, pointer.y), &mut scene);
    }
}

#[test]
fn test_obstacle_never_overlapped() {
    let mut rng = Lcg(1234);
    for case in 0..20 {
        let mut scene = scene();
        let root = scene.root();
        let node = square(&mut scene, root, 0.0, 0.0, 40.0);
        let obstacle = scene
            .insert(scene.root(), Vec2::new(300.0, 250.0), Vec2::new(120.0, 80.0))
            .unwrap();
        scene.add_class(obstacle, "rock");
        let rock = scene.rect(obstacle).unwrap();

        // starting positions around the obstacle, never inside it
        let start = match case % 4 {
            0 => Vec2::new(200.0, 260.0),
            1 => Vec2::new(500.0, 270.0),
            2 => Vec2::new(320.0, 100.0),
            _ => Vec2::new(250.0, 200.0),
        };
        let mut drag = Draggable::new(
            node,
            DragConfig::new()
                .obstacles(".rock")
                .default_position(start),
            &mut scene,
        )
        .unwrap();
        assert!(!drag.rect().overlaps(&rock));

        let mut pointer = start + Vec2::splat(10.0);
        drag.handle_pointer_down(&at(node, pointer.x, pointer.y), &mut scene);
        for _ in 0..150 {
            pointer += Vec2::new(rng.step(150), rng.step(150));
            drag.handle_pointer_move(&at(node, pointer.x, pointer.y), &mut scene);
            assert!(
                !drag.rect().overlaps(&rock),
                "case {}: {:?} overlaps {:?}",
                case,
                drag.rect(),
                rock
            );
        }
    }
}

#[test]
fn test_absent_obstacles_are_excluded_and_reevaluated() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new().obstacles(".wall"), &mut scene).unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.handle_pointer_move(&at(node, 300.0, 0.0), &mut scene);
    assert_eq!(drag.position().x, 300.0);
    drag.handle_pointer_up(&at(node, 300.0, 0.0), &mut scene);

    let wall = scene
        .insert(scene.root(), Vec2::new(400.0, 0.0), Vec2::new(10.0, 50.0))
        .unwrap();
    scene.add_class(wall, "wall");

    drag.handle_pointer_down(&at(node, 300.0, 0.0), &mut scene);
    assert_eq!(drag.obstacle_rects().len(), 1);
    drag.handle_pointer_move(&at(node, 600.0, 0.0), &mut scene);
    assert_eq!(drag.position().x, 350.0);
}

#[test]
fn test_own_subtree_is_never_an_obstacle() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let inner = square(&mut scene, node, 10.0, 10.0, 10.0);
    scene.add_class(node, "block");
    scene.add_class(inner, "block");
    let mut drag = Draggable::new(node, DragConfig::new().obstacles(".block"), &mut scene).unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    assert!(drag.obstacle_rects().is_empty());
}

#[test]
fn test_event_order_and_payloads() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let child = square(&mut scene, node, 0.0, 0.0, 10.0);
    let mut drag = Draggable::new(node, DragConfig::new(), &mut scene).unwrap();

    drag.handle_pointer_down(&at(child, 5.0, 5.0), &mut scene);
    drag.handle_pointer_move(&at(child, 15.0, 25.0), &mut scene);
    drag.handle_pointer_up(&at(child, 15.0, 25.0), &mut scene);

    assert_eq!(
        event_kinds(&scene),
        vec![
            DragEventKind::DragStart,
            DragEventKind::Update,
            DragEventKind::Drag,
            DragEventKind::DragEnd,
            DragEventKind::Release,
        ]
    );
    let (target, drag_event) = scene.events()[2];
    assert_eq!(target, node);
    assert_eq!(drag_event.name(), "drag");
    assert_eq!(drag_event.data.offset, Vec2::new(10.0, 20.0));
    assert_eq!(drag_event.data.root_node, node);
    assert_eq!(drag_event.data.event_target, Some(child));
}

#[test]
fn test_callbacks_fire() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b, c) = (log.clone(), log.clone(), log.clone());
    let mut drag = Draggable::new(
        node,
        DragConfig::new()
            .on_drag_start(move |d| a.borrow_mut().push(("start", d.offset)))
            .on_drag(move |d| b.borrow_mut().push(("drag", d.offset)))
            .on_drag_end(move |d| c.borrow_mut().push(("end", d.offset))),
        &mut scene,
    )
    .unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.handle_pointer_move(&at(node, 7.0, 0.0), &mut scene);
    drag.handle_pointer_up(&at(node, 7.0, 0.0), &mut scene);

    assert_eq!(
        *log.borrow(),
        vec![
            ("start", Vec2::ZERO),
            ("drag", Vec2::new(7.0, 0.0)),
            ("end", Vec2::new(7.0, 0.0)),
        ]
    );
}

#[test]
fn test_pointer_cancel_keeps_position() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new(), &mut scene).unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.handle_pointer_move(&at(node, 40.0, 40.0), &mut scene);
    drag.handle_pointer_cancel(&at(node, 40.0, 40.0), &mut scene);

    assert_eq!(drag.state(), InteractionState::Idle);
    assert_eq!(drag.position(), Vec2::new(40.0, 40.0));
    assert_eq!(scene.captured(PointerId(1)), None);
    assert_eq!(scene.count_events(DragEventKind::DragEnd), 1);
}

#[test]
fn test_dispose_is_idempotent() {
    let mut scene = scene();
    let root = scene.root();
    let arena = square(&mut scene, root, 0.0, 0.0, 300.0);
    let node = square(&mut scene, arena, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new().bounds(BoundsSpec::Parent), &mut scene)
        .unwrap();
    assert_eq!(scene.observer_count(), 2);

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.dispose(&mut scene);
    let events_after_first = scene.events().len();
    drag.dispose(&mut scene);

    assert!(drag.is_disposed());
    assert_eq!(scene.observer_count(), 0);
    assert_eq!(scene.captured(PointerId(1)), None);
    assert!(!scene.has_class(node, "draggable"));
    assert_eq!(scene.events().len(), events_after_first);
    assert!(!drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene));
}

#[test]
fn test_identical_handle_and_cancel_fail_fast() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let err = Draggable::new(
        node,
        DragConfig::new().handle(".grip").cancel(".grip"),
        &mut scene,
    )
    .unwrap_err();
    assert_eq!(err, DragError::HandleCancelConflict(".grip".to_string()));
    assert!(!scene.has_class(node, "draggable"));
}

#[test]
fn test_unresolved_bounds_fail_at_construction() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let err = Draggable::new(
        node,
        DragConfig::new().bounds(BoundsSpec::selector("#missing")),
        &mut scene,
    )
    .unwrap_err();
    assert_eq!(err, DragError::BoundsNotFound("#missing".to_string()));
    assert_eq!(scene.observer_count(), 0);
}

#[test]
fn test_update_config_takes_effect_next_interaction() {
    let mut scene = scene();
    let root = scene.root();
    let arena = square(&mut scene, root, 0.0, 0.0, 100.0);
    let node = square(&mut scene, arena, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new(), &mut scene).unwrap();

    drag.update_config(
        DragConfigPatch::new()
            .axis(Axis::Y)
            .bounds(BoundsSpec::Parent),
        &mut scene,
    )
    .unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.handle_pointer_move(&at(node, 300.0, 300.0), &mut scene);
    assert_eq!(drag.position(), Vec2::new(0.0, 50.0));
}

#[test]
fn test_failed_update_leaves_config_untouched() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new().bounds(BoundsSpec::Body), &mut scene)
        .unwrap();
    let observers = scene.observer_count();

    let err = drag
        .update_config(
            DragConfigPatch::new()
                .axis(Axis::X)
                .bounds(BoundsSpec::selector(".nope")),
            &mut scene,
        )
        .unwrap_err();
    assert!(matches!(err, DragError::BoundsNotFound(_)));
    assert_eq!(drag.config().axis, Axis::Both);
    assert_eq!(drag.config().bounds, BoundsSpec::Body);
    assert_eq!(scene.observer_count(), observers);

    let err = drag
        .update_config(
            DragConfigPatch::new()
                .handle(Some(ElementSpec::from(".x")))
                .cancel(Some(ElementSpec::from(".x"))),
            &mut scene,
        )
        .unwrap_err();
    assert!(matches!(err, DragError::HandleCancelConflict(_)));
    assert_eq!(drag.config().handle, None);
}

#[test]
fn test_update_config_position_tweens() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new(), &mut scene).unwrap();

    drag.update_config(DragConfigPatch::new().position(Vec2::new(0.0, 200.0)), &mut scene)
        .unwrap();
    assert_eq!(drag.position(), Vec2::new(0.0, 200.0));
    assert!(drag.is_animating());

    drag.update_config(DragConfigPatch::new().tween(TweenConfig::instant()), &mut scene)
        .unwrap();
    drag.update_config(DragConfigPatch::new().position(Vec2::new(10.0, 0.0)), &mut scene)
        .unwrap();
    assert!(!drag.is_animating());
    assert_eq!(scene.rect(node).unwrap().left, 10.0);
}

#[test]
fn test_drag_start_settles_running_tween() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new(), &mut scene).unwrap();

    drag.set_position(Vec2::new(300.0, 0.0), &mut scene);
    drag.tick(0.01, &mut scene);
    assert!(drag.is_animating());

    drag.handle_pointer_down(&at(node, 310.0, 10.0), &mut scene);
    assert!(!drag.is_animating());
    assert_eq!(scene.rect(node).unwrap().left, 300.0);

    drag.handle_pointer_move(&at(node, 320.0, 10.0), &mut scene);
    assert_eq!(drag.position(), Vec2::new(310.0, 0.0));
    assert_eq!(drag.rendered_position(), drag.position());
}

#[test]
fn test_container_resize_refreshes_bounds() {
    let mut scene = scene();
    let root = scene.root();
    let arena = square(&mut scene, root, 0.0, 0.0, 200.0);
    let node = square(&mut scene, arena, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new().bounds(BoundsSpec::Parent), &mut scene)
        .unwrap();

    let observers = scene.resize(arena, Vec2::new(400.0, 200.0));
    assert_eq!(observers.len(), 1);
    scene.take_events();
    assert!(drag.handle_resize(observers[0], &mut scene));
    assert_eq!(drag.bounds_rect().right, 400.0);
    assert_eq!(event_kinds(&scene), vec![DragEventKind::Update]);

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.handle_pointer_move(&at(node, 999.0, 0.0), &mut scene);
    assert_eq!(drag.position().x, 350.0);
}

#[test]
fn test_element_resize_corrects_tracked_rect() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let mut drag = Draggable::new(node, DragConfig::new(), &mut scene).unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    drag.handle_pointer_move(&at(node, 30.0, 0.0), &mut scene);

    let observers = scene.resize(node, Vec2::new(80.0, 80.0));
    assert!(drag.handle_resize(observers[0], &mut scene));
    assert_eq!(drag.rect(), VirtualRect::from_edges(30.0, 0.0, 110.0, 80.0));

    let stranger = scene.observe_resize(scene.root());
    assert!(!drag.handle_resize(stranger, &mut scene));
}

#[test]
fn test_user_select_left_alone_when_disabled() {
    let mut scene = scene();
    let root = scene.root();
    let node = square(&mut scene, root, 0.0, 0.0, 50.0);
    let mut drag =
        Draggable::new(node, DragConfig::new().user_select_none(false), &mut scene).unwrap();

    drag.handle_pointer_down(&at(node, 0.0, 0.0), &mut scene);
    assert!(scene.user_select());
}
