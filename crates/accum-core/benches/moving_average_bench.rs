// File: crates/accum-core/benches/moving_average_bench.rs
// Summary: Throughput of the running-sum moving average over long accumulation series.

use accum_core::moving_average::sma;
use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};

fn gen_accumulated(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    let mut total = 0.0f64;
    for i in 0..n {
        // daily yield with a slow wobble
        total += 0.8 + (i as f64 * 0.05).sin() * 0.2;
        v.push(total);
    }
    v
}

fn bench_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("sma");
    for &n in &[1_000usize, 100_000usize] {
        let data = gen_accumulated(n);
        for &period in &[7usize, 30usize, 365usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_p{period}")), &period, |b, &p| {
                b.iter(|| black_box(sma(&data, p)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sma);
criterion_main!(benches);
