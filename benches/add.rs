use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lattice::point::{Overflow, Point};
use rand::{thread_rng, Rng};

fn points(n: usize) -> Vec<(Point, Point)> {
    let mut rng = thread_rng();
    (0..n).map(|_| (rng.gen(), rng.gen())).collect()
}

fn add(c: &mut Criterion) {
    let pairs = points(1024);
    c.bench_function("add_wrapping", |b| {
        b.iter(|| {
            pairs
                .iter()
                .fold(Point::ORIGIN, |acc, &(p, q)| acc + black_box(p) + q)
        })
    });
    c.bench_function("add_saturating", |b| {
        b.iter(|| {
            pairs.iter().fold(Point::ORIGIN, |acc, &(p, q)| {
                acc.saturating_add(black_box(p).saturating_add(q))
            })
        })
    });
    c.bench_function("add_checked", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter_map(|&(p, q)| black_box(p).add_with(q, Overflow::Checked).ok())
                .count()
        })
    });
}

criterion_group!(benches, add);
criterion_main!(benches);
