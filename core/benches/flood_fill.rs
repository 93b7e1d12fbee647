use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use swooper_core::*;

fn bench_generate(c: &mut Criterion) {
    let generator = BernoulliGenerator::new(0.2).unwrap();
    c.bench_function("generate 200x200", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| generator.generate(black_box((200, 200)), &mut rng).unwrap())
    });
}

fn bench_flood_fill(c: &mut Criterion) {
    let empty = Grid::empty((200, 200));
    c.bench_function("flood fill empty 200x200", |b| {
        b.iter(|| {
            let mut grid = empty.clone();
            flood_reveal(&mut grid, black_box((100, 100)))
        })
    });

    let mut rng = StdRng::seed_from_u64(1);
    let sparse = BernoulliGenerator::new(0.05)
        .unwrap()
        .generate((200, 200), &mut rng)
        .unwrap();
    c.bench_function("first click sparse 200x200", |b| {
        b.iter(|| {
            let mut grid = sparse.clone();
            reveal(&mut grid, black_box((0, 0)), true)
        })
    });
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
