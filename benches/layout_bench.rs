use chart_axes::api::{AxisEngine, AxisInput, ChartConfig};
use chart_axes::core::{
    AxisId, ContentItem, ValueExtent, ValuesRange, Viewport, aggregate_extent, time_ticks,
};
use chart_axes::render::{HeuristicTextMeasurer, NullRenderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_content(count: usize) -> Vec<ContentItem> {
    (0..count)
        .map(|i| {
            let base = (i as f64 * 0.37).sin() * 40.0;
            let extent = ValueExtent::new(base - 5.0, base + 5.0);
            let range = ValuesRange::new().with(AxisId::Y, extent);
            if i % 3 == 0 {
                ContentItem::grouped(
                    format!("item-{i}"),
                    AxisId::Y,
                    format!("stack-{}", i % 7),
                    range,
                )
            } else {
                ContentItem::simple(format!("item-{i}"), AxisId::Y, range)
            }
        })
        .collect()
}

fn bench_time_ticks(c: &mut Criterion) {
    c.bench_function("time_ticks_epoch_month", |b| {
        b.iter(|| {
            let _ = time_ticks(
                black_box(1_704_067_200_000.0),
                black_box(1_706_745_600_000.0),
                black_box(12.0),
            );
        })
    });
}

fn bench_aggregate_extent_1k(c: &mut Criterion) {
    let content = generated_content(1_000);

    c.bench_function("aggregate_extent_1k", |b| {
        b.iter(|| {
            let _ = aggregate_extent(black_box(AxisId::Y), black_box(&content));
        })
    });
}

fn bench_engine_layout_pass(c: &mut Criterion) {
    let config = ChartConfig::new(Viewport::new(1600.0, 900.0), 0.0, 2_000.0)
        .with_y_axis(AxisInput::with_limits(-20.0, 20.0).with_label("Value"))
        .with_y2_axis(AxisInput::with_limits(0.0, 100.0).with_label("Rate"));
    let mut engine = AxisEngine::new(
        NullRenderer::default(),
        HeuristicTextMeasurer::default(),
        config,
    )
    .expect("engine init");
    engine
        .load_contents(generated_content(200))
        .expect("load content");

    c.bench_function("engine_layout_pass", |b| {
        b.iter(|| {
            let _ = engine.layout().expect("layout should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_time_ticks,
    bench_aggregate_extent_1k,
    bench_engine_layout_pass
);
criterion_main!(benches);
