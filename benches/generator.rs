//! Benchmarks for the raw generator and the full daily draw.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quordle_daily::{excluded_words, load_word_list, MersenneTwister, QuartetDrawer};

fn bench_next_u32(c: &mut Criterion) {
    let mut rng = MersenneTwister::new(5489);
    c.bench_function("next_u32", |b| b.iter(|| black_box(rng.next_u32())));
}

fn bench_reseed(c: &mut Criterion) {
    let mut seed = 0u32;
    c.bench_function("reseed", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(MersenneTwister::new(black_box(seed)))
        })
    });
}

fn bench_draw_for_seed(c: &mut Criterion) {
    let drawer = QuartetDrawer::new(load_word_list(), excluded_words()).unwrap();
    let mut seed = 0u32;
    c.bench_function("draw_for_seed", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(drawer.draw_for_seed(black_box(seed)).unwrap())
        })
    });
}

criterion_group!(benches, bench_next_u32, bench_reseed, bench_draw_for_seed);
criterion_main!(benches);
