use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mandelbrot_viewport::presenters::checkerboard::draw_checkerboard;
use mandelbrot_viewport::{InputEvent, InteractionController, Viewport};

fn viewport_800x600() -> Viewport {
    let mut viewport = Viewport::default();
    viewport.resize(800, 600);
    viewport
}

fn bench_pan(c: &mut Criterion) {
    let mut viewport = viewport_800x600();

    c.bench_function("viewport_pan", |b| {
        b.iter(|| {
            viewport.pan(black_box(-40.0), black_box(12.0));
            viewport.pan(black_box(40.0), black_box(-12.0))
        })
    });
}

fn bench_zoom(c: &mut Criterion) {
    let mut viewport = viewport_800x600();

    c.bench_function("viewport_zoom_by_anchored", |b| {
        b.iter(|| {
            viewport.zoom_by(black_box(-0.1), black_box(0.25), black_box(-0.5));
            viewport.zoom_by(black_box(0.1), black_box(0.25), black_box(-0.5))
        })
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let mut viewport = viewport_800x600();
    let mut controller = InteractionController::default();
    let gesture = [
        InputEvent::press(400.0, 300.0),
        InputEvent::move_to(420.0, 300.0),
        InputEvent::move_to(400.0, 300.0),
        InputEvent::release(400.0, 300.0),
        InputEvent::wheel(-100.0, 600.0, 150.0),
        InputEvent::wheel(100.0, 600.0, 150.0),
    ];

    c.bench_function("interaction_dispatch_gesture", |b| {
        b.iter(|| {
            for event in &gesture {
                black_box(controller.handle(black_box(event), &mut viewport));
            }
        })
    });
}

fn bench_checkerboard(c: &mut Criterion) {
    let view = viewport_800x600().state();
    let mut frame = vec![0u8; 800 * 600 * 4];

    c.bench_function("checkerboard_800x600", |b| {
        b.iter(|| draw_checkerboard(black_box(&mut frame), black_box(&view)))
    });
}

criterion_group!(benches, bench_pan, bench_zoom, bench_dispatch, bench_checkerboard);
criterion_main!(benches);
