// File: crates/polydecay-core/benches/schedule_bench.rs
// Summary: Sampling cost of the decay formula across all default powers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polydecay_core::{learning_rate, sample_all, ScheduleConfig};

fn bench_schedule(c: &mut Criterion) {
    c.bench_function("learning_rate_single", |b| {
        b.iter(|| learning_rate(black_box(1234.0), 4000.0, 1e-4, 1e-7, black_box(1.5), 400.0))
    });

    let cfg = ScheduleConfig::default();
    c.bench_function("sample_all_default_powers", |b| {
        b.iter(|| black_box(sample_all(black_box(&cfg))))
    });
}

criterion_group!(benches, bench_schedule);
criterion_main!(benches);
