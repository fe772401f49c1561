use corral::cluster::{Dbscan, Kmeans};
use corral::{cluster_documents, Metric};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn synthetic_points(n: usize, d: usize) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f32>()).collect())
        .collect()
}

fn synthetic_corpus(n: usize) -> Vec<String> {
    const POOLS: [&[&str]; 3] = [
        &["football", "league", "score", "team", "player", "season", "match", "coach"],
        &["recipe", "oven", "butter", "flour", "simmer", "baking", "dough", "skillet"],
        &["database", "query", "index", "schema", "transaction", "replica", "shard", "cache"],
    ];

    let mut rng = StdRng::seed_from_u64(7);
    (0..n)
        .map(|i| {
            let pool = POOLS[i % POOLS.len()];
            (0..12)
                .map(|_| pool[rng.random_range(0..pool.len())])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");
    let data = synthetic_points(200, 50);

    group.bench_function("run_n200_d50_k5", |b| {
        b.iter(|| {
            let model = Kmeans::new(5)
                .with_max_iterations(10)
                .with_seed(42)
                .with_metric(Metric::Euclidean);
            model.run(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");
    let data = synthetic_points(200, 50);

    group.bench_function("run_n200_d50", |b| {
        b.iter(|| {
            let model = Dbscan::new(0.5, 3).with_metric(Metric::Euclidean);
            model.run(black_box(&data)).unwrap();
        })
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let docs = synthetic_corpus(60);

    group.bench_function("cluster_documents_n60", |b| {
        b.iter(|| cluster_documents(black_box(&docs), Some(42)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_kmeans, bench_dbscan, bench_pipeline);
criterion_main!(benches);
