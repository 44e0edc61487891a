//! Criterion benchmarks for 2D line queries.
//! The fixed pair mirrors the original throughput probe:
//! l1 through (0,0)-(10,10) against y = 4x - 1.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fastline::{Line, Vec2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_lines(n: usize, seed: u64) -> Vec<Line> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let p1 = Vec2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        let p2 = Vec2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        if let Ok(l) = Line::from_points(p1, p2) {
            out.push(l);
        }
    }
    out
}

fn bench_line2(c: &mut Criterion) {
    let mut group = c.benchmark_group("line2");

    let l1 = Line::from_points(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)).unwrap();
    let l2 = Line::from_slope_intercept(4.0, -1.0).unwrap();
    group.bench_function("intersection_fixed_pair", |b| {
        b.iter(|| l1.intersection(&l2))
    });

    group.bench_function("intersection_random_pairs", |b| {
        b.iter_batched(
            || random_lines(128, 43),
            |lines| {
                let mut hits = 0usize;
                for pair in lines.chunks_exact(2) {
                    if pair[0].intersection(&pair[1]).is_some() {
                        hits += 1;
                    }
                }
                hits
            },
            BatchSize::SmallInput,
        )
    });

    let p = Vec2::new(3.0, -7.0);
    group.bench_function("distance_to", |b| b.iter(|| l1.distance_to(p)));
    group.bench_function("side_of", |b| b.iter(|| l1.side_of(p)));

    group.bench_function("from_points", |b| {
        b.iter(|| Line::from_points(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_line2);
criterion_main!(benches);
