//! Benchmarks for the money conversion hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use invoice_gateway::money::{to_decimal_string, to_minor_units};

fn bench_to_minor_units(c: &mut Criterion) {
    c.bench_function("to_minor_units", |b| {
        b.iter(|| to_minor_units(black_box("1500.05")))
    });
}

fn bench_to_decimal_string(c: &mut Criterion) {
    c.bench_function("to_decimal_string", |b| {
        b.iter(|| to_decimal_string(black_box(150005)))
    });
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip", |b| {
        b.iter(|| {
            let minor = to_minor_units(black_box("1500.05")).unwrap();
            to_decimal_string(minor)
        })
    });
}

criterion_group!(
    benches,
    bench_to_minor_units,
    bench_to_decimal_string,
    bench_round_trip
);
criterion_main!(benches);
