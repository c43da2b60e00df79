//! Benchmarks for obstacle clamping and the full pointer-move pipeline

use astrelis_drag::{
    CollisionMode, DragConfig, DragHost, Draggable, PointerEvent, Scene, VirtualRect, clamp_delta,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec2;

/// A grid of 20x20 obstacles with 10px gaps, offset away from the origin.
fn obstacle_grid(count: usize) -> Vec<VirtualRect> {
    let columns = (count as f32).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let origin = Vec2::new((i % columns) as f32 * 30.0, (i / columns) as f32 * 30.0)
                + Vec2::splat(100.0);
            VirtualRect::from_origin_size(origin, Vec2::splat(20.0))
        })
        .collect()
}

fn bench_clamp_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("clamp_delta");
    let current = VirtualRect::from_origin_size(Vec2::new(0.0, 105.0), Vec2::new(40.0, 10.0));

    for count in [1, 10, 100, 1000] {
        let obstacles = obstacle_grid(count);
        group.throughput(Throughput::Elements(count as u64));

        for mode in [CollisionMode::Sequential, CollisionMode::Independent] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), count),
                &obstacles,
                |b, obstacles| {
                    b.iter(|| {
                        clamp_delta(
                            black_box(Vec2::new(500.0, 300.0)),
                            black_box(&current),
                            obstacles,
                            mode,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer_move");

    for count in [0, 50, 500] {
        let mut scene = Scene::new(Vec2::new(4000.0, 4000.0));
        let root = scene.root();
        for rect in obstacle_grid(count) {
            if let Some(id) = scene.insert(root, rect.origin() + Vec2::splat(200.0), rect.size()) {
                scene.add_class(id, "obstacle");
            }
        }
        let node = scene
            .insert(root, Vec2::ZERO, Vec2::new(40.0, 40.0))
            .expect("root exists");
        let mut drag = Draggable::new(node, DragConfig::new().obstacles(".obstacle"), &mut scene)
            .expect("valid config");
        drag.handle_pointer_down(&PointerEvent::new(node, Vec2::splat(10.0)), &mut scene);

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            let mut step = 0u32;
            b.iter(|| {
                step = step.wrapping_add(1);
                let x = (step % 64) as f32;
                drag.handle_pointer_move(
                    &PointerEvent::new(node, black_box(Vec2::new(10.0 + x, 10.0))),
                    &mut scene,
                );
                scene.take_events();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clamp_delta, bench_pointer_move);
criterion_main!(benches);
