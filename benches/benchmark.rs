// Query-path benchmarks for LibriX
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use librix_core::{Catalog, Library, Metric, NeighborModel, PivotMatrix, RatingsTable, Recommender};
use rand::prelude::*;
use std::sync::Arc;

const DIM: usize = 64;

fn generate_library(rows: usize) -> Arc<Library> {
    let mut rng = rand::rng();
    let titles: Vec<String> = (0..rows).map(|i| format!("book {i}")).collect();
    let values: Vec<f32> = (0..rows * DIM)
        .map(|_| rng.random_range(-1.0f32..1.0f32))
        .collect();

    let matrix = PivotMatrix::new(titles.clone(), DIM, values).unwrap();
    let model = NeighborModel::fit(&matrix, Metric::Cosine);
    Arc::new(Library::new(Catalog::new(titles), matrix, model, RatingsTable::default()).unwrap())
}

fn benchmark_kneighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("kneighbors");

    for size in [100, 1000, 10000].iter() {
        let library = generate_library(*size);
        let query = library.matrix().row(0).unwrap().to_vec();

        group.bench_with_input(BenchmarkId::new("librix", size), size, |b, _| {
            b.iter(|| {
                let hits = library.model().kneighbors(black_box(&query), 6).unwrap();
                black_box(hits);
            });
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let library = generate_library(1000);
    let recommender = Recommender::new(library);

    c.bench_function("recommend_1000_titles", |b| {
        b.iter(|| {
            let results = recommender.recommend(black_box("book 500")).unwrap();
            black_box(results);
        });
    });
}

criterion_group!(benches, benchmark_kneighbors, benchmark_recommend);
criterion_main!(benches);
