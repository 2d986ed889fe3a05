//! Estimator benchmarks across variants and pattern lengths.
//!
//! Run with: `cargo bench --package possibilities-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use possibilities_bench::benchmark_configs;
use possibilities_lib::prelude::*;
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    for config in benchmark_configs() {
        let estimator = Estimator::new(BranchingModel::new(config.variant));
        group.throughput(Throughput::Elements(config.length as u64));
        group.bench_with_input(
            BenchmarkId::new(config.variant.as_str(), config.length),
            &config.length,
            |b, &length| b.iter(|| estimator.run(black_box(length))),
        );
    }

    group.finish();
}

fn report_benchmark(c: &mut Criterion) {
    let estimate = Estimator::new(BranchingModel::Harmonic)
        .run_default()
        .expect("default length is valid");
    let formatter = ReportFormatter::new();

    c.bench_function("report/harmonic", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(512);
            formatter.write_report(black_box(&estimate), &mut buf).unwrap();
            buf
        });
    });
}

criterion_group!(benches, estimate_benchmark, report_benchmark);
criterion_main!(benches);
