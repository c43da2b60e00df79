//! Headless Drag Replay - Scripted Pointer Input Against an In-Memory Scene
//!
//! Demonstrates the drag engine without a window:
//! - Bounding a panel to its container
//! - Restricting movement to a handle while a close button cancels
//! - Blocking the panel with an obstacle
//! - Tweening to a programmatic position
//!
//! Set `RUST_LOG=astrelis_drag=trace` for per-move output.

use astrelis_drag::{
    BoundsSpec, DragConfig, DragEventKind, DragHost, DragResult, Draggable, PointerEvent, Scene,
};
use glam::Vec2;

fn main() -> DragResult<()> {
    astrelis_drag::logging::init();

    let mut scene = Scene::new(Vec2::new(640.0, 480.0));
    let root = scene.root();
    let Some(desk) = scene.insert(root, Vec2::new(20.0, 20.0), Vec2::new(600.0, 440.0)) else {
        return Ok(());
    };
    scene.set_element_id(desk, "desk");

    let Some(panel) = scene.insert(desk, Vec2::new(40.0, 40.0), Vec2::new(160.0, 120.0)) else {
        return Ok(());
    };
    let Some(title) = scene.insert(panel, Vec2::new(40.0, 40.0), Vec2::new(160.0, 24.0)) else {
        return Ok(());
    };
    let Some(close) = scene.insert(title, Vec2::new(176.0, 44.0), Vec2::new(16.0, 16.0)) else {
        return Ok(());
    };
    let Some(lamp) = scene.insert(desk, Vec2::new(400.0, 20.0), Vec2::new(60.0, 300.0)) else {
        return Ok(());
    };
    scene.add_class(title, "title");
    scene.add_class(close, "close");
    scene.add_class(lamp, "solid");

    let mut drag = Draggable::new(
        panel,
        DragConfig::new()
            .bounds(BoundsSpec::selector("#desk"))
            .handle(".title")
            .cancel(".close")
            .obstacles(".solid")
            .on_drag_end(|data| println!("  dropped at {:?}", data.offset)),
        &mut scene,
    )?;

    println!("Pressing the close button:");
    let started = drag.handle_pointer_down(&PointerEvent::new(close, Vec2::new(180.0, 50.0)), &mut scene);
    println!("  drag started: {}", started);

    println!("Dragging by the title toward the lamp:");
    let grab = Vec2::new(60.0, 50.0);
    drag.handle_pointer_down(&PointerEvent::new(title, grab), &mut scene);
    for step in 1..=10 {
        let pointer = grab + Vec2::new(step as f32 * 40.0, 0.0);
        drag.handle_pointer_move(&PointerEvent::new(title, pointer), &mut scene);
        println!("  pointer {:?} -> rect {:?}", pointer, drag.rect());
    }
    drag.handle_pointer_up(&PointerEvent::new(title, grab), &mut scene);

    println!("Tweening back home:");
    drag.set_position(Vec2::ZERO, &mut scene);
    let mut frames = 0;
    while drag.tick(1.0 / 60.0, &mut scene) {
        frames += 1;
    }
    println!(
        "  settled at {:?} after {} frames",
        drag.rendered_position(),
        frames
    );

    println!(
        "Events: {} dragstart, {} drag, {} update",
        scene.count_events(DragEventKind::DragStart),
        scene.count_events(DragEventKind::Drag),
        scene.count_events(DragEventKind::Update)
    );

    drag.dispose(&mut scene);
    Ok(())
}
