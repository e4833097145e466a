use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fukubiki::{locate, RngSource, WeightedCollection};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn weights(n: usize) -> WeightedCollection<usize> {
    let w: Vec<f64> = (0..n).map(|i| 1.0 / (1.0 + i as f64)).collect();
    WeightedCollection::zip(w, (0..n).collect()).expect("valid weights")
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    let sizes = [10, 100, 1_000];

    for &size in &sizes {
        let coll = weights(size);
        let total = coll.total_weight();
        group.bench_function(format!("scan_n{}", size), |b| {
            b.iter(|| locate(black_box(coll.as_slice()), total, black_box(0.73)))
        });
    }
    group.finish();
}

fn bench_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("replacement");
    let sizes = [10, 100, 1_000];
    let draws_per_iter = 1_000;

    for &size in &sizes {
        let coll = weights(size);
        group.bench_function(format!("draws{}_n{}", draws_per_iter, size), |b| {
            b.iter(|| {
                let source = RngSource::new(ChaCha8Rng::seed_from_u64(1));
                let draws = coll.draw_with_replacement_using(source);
                for drawn in draws.take(draws_per_iter) {
                    black_box(drawn);
                }
            })
        });
    }
    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");
    let sizes = [10, 100, 1_000];

    for &size in &sizes {
        let coll = weights(size);
        group.bench_function(format!("drain_n{}", size), |b| {
            b.iter(|| {
                let mut working = coll.clone();
                let source = RngSource::new(ChaCha8Rng::seed_from_u64(1));
                for drawn in working.draw_with_removal_using(source).drain() {
                    black_box(drawn);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_locate, bench_replacement, bench_removal);
criterion_main!(benches);
