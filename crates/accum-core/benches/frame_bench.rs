// File: crates/accum-core/benches/frame_bench.rs
// Summary: Cost of assembling a full frame (scales, paths, bars, hover) and serializing it to SVG.

use accum_core::{AccumulationChart, ChartConfig, MountGate, SeriesPoint};
use criterion::{criterion_group, criterion_main, black_box, Criterion};

fn build_chart(n: usize) -> AccumulationChart {
    let mut total = 0.0f64;
    let points = (0..n)
        .map(|i| {
            let added = 0.8 + (i as f64 * 0.1).cos() * 0.3;
            total += added;
            SeriesPoint::new(format!("day-{i}"), total, added)
        })
        .collect::<Vec<_>>();
    let mut chart = AccumulationChart::new(ChartConfig::default().with_target(total * 0.9))
        .expect("default config is valid")
        .with_mount_gate(MountGate::mounted_now());
    chart.set_series(points).expect("finite series");
    chart
}

fn bench_frame(c: &mut Criterion) {
    let mut chart = build_chart(365);
    c.bench_function("frame_365", |b| b.iter(|| black_box(chart.frame())));
    c.bench_function("svg_365", |b| b.iter(|| black_box(chart.render_svg())));

    let x = chart.scales().map(|s| s.x.to_px(200.0)).unwrap_or(0.0);
    c.bench_function("pointer_move_365", |b| {
        b.iter(|| {
            chart.pointer_leave();
            black_box(chart.pointer_move(x, 100.0))
        })
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
