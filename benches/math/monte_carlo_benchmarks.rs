use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use mcint::math::monte_carlo::monte_carlo_integration;

fn bench_monte_carlo_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo_integration");
    for samples in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &samples| {
            b.iter(|| {
                monte_carlo_integration(
                    |x| 3.0 * x * x + 2.0 * x,
                    black_box(2.0),
                    black_box(3.0),
                    samples,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_monte_carlo_integration);
criterion_main!(benches);
