//! Benchmarks for border geometry, caption layout and painting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roundsquare_core::{Animate, Constraints, FallbackMetrics, Rect, RecordingCanvas, Size, TextGravity, Widget};
use roundsquare_widgets::{
    border_path, layout_caption, progress_segment, CaptionParams, InteractionMode,
    RoundSquareProgress,
};

fn bench_border_path(c: &mut Criterion) {
    let viewport = Rect::new(0.0, 0.0, 240.0, 240.0);
    c.bench_function("border_path", |b| {
        b.iter(|| border_path(black_box(viewport), black_box(12.0), black_box(24.0)))
    });
}

fn bench_progress_segment(c: &mut Criterion) {
    let border = border_path(Rect::new(0.0, 0.0, 240.0, 240.0), 12.0, 24.0);

    c.bench_function("progress_segment_45", |b| {
        b.iter(|| progress_segment(&border, black_box(45.0), black_box(0), true))
    });

    c.bench_function("progress_segment_wrapped", |b| {
        b.iter(|| progress_segment(&border, black_box(90.0), black_box(300), true))
    });
}

fn bench_caption_layout(c: &mut Criterion) {
    let params = CaptionParams {
        text: "100%",
        metrics: &FallbackMetrics,
        viewport: Rect::new(0.0, 0.0, 240.0, 240.0),
        stroke_width: 12.0,
        density: 2.0,
        fixed_size: None,
        gravity: TextGravity::Center,
    };
    c.bench_function("caption_layout", |b| b.iter(|| layout_caption(black_box(&params))));
}

fn bench_measure(c: &mut Criterion) {
    let widget = RoundSquareProgress::new().min_size(Size::new(48.0, 48.0));
    let constraints = Constraints::new(0.0, 200.0, 0.0, 200.0);
    c.bench_function("round_square_measure", |b| {
        b.iter(|| widget.measure(black_box(constraints)))
    });
}

fn bench_paint(c: &mut Criterion) {
    let mut widget = RoundSquareProgress::new()
        .mode(InteractionMode::Preview)
        .corner_radius(16.0)
        .text("72")
        .gravity(TextGravity::Center);
    widget.set_progress_percent(72.0);
    widget.layout(Rect::new(0.0, 0.0, 240.0, 240.0));

    c.bench_function("round_square_paint", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            widget.paint(&mut canvas);
            black_box(canvas.command_count())
        })
    });
}

fn bench_animation_frame(c: &mut Criterion) {
    c.bench_function("round_square_tick", |b| {
        b.iter_batched(
            || {
                let mut widget = RoundSquareProgress::new();
                widget.set_progress_percent(80.0);
                widget
            },
            |mut widget| widget.tick(black_box(1.0 / 60.0)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_border_path,
    bench_progress_segment,
    bench_caption_layout,
    bench_measure,
    bench_paint,
    bench_animation_frame,
);

criterion_main!(benches);
