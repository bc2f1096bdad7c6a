use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chainsweep::generators::{circle, sawtooth};

fn reduce_circle(c: &mut Criterion) {
    let points = circle(1_000);
    c.bench_function("reduce circle 1000", |b| {
        b.iter(|| chainsweep::reduce(black_box(&points).iter().copied()))
    });
}

fn reduce_sawtooth(c: &mut Criterion) {
    let points = sawtooth(1_000);
    c.bench_function("reduce sawtooth 1000", |b| {
        b.iter(|| chainsweep::reduce(black_box(&points).iter().copied()))
    });
}

criterion_group!(benches, reduce_circle, reduce_sawtooth);
criterion_main!(benches);
