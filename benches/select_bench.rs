//! Criterion benchmarks for the selection strategies.
//!
//! Uses a synthetic catalog scattered around a fixed city centre so the
//! numbers reflect scoring and search overhead only.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dine_select::ga::{GeneticConfig, GeneticSearch};
use dine_select::greedy::greedy_search;
use dine_select::model::{Restaurant, SelectionConstraints};
use dine_select::ranking::top_n;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CUISINES: [&str; 4] = ["Turkish", "Italian", "Cafe", "American"];

fn synthetic_catalog(n: usize) -> Vec<Restaurant> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            let cuisine = CUISINES[rng.random_range(0..CUISINES.len())];
            Restaurant::new(format!("r{i}"), [cuisine, "Cafe"])
                .with_cost(rng.random_range(50..600))
                .with_reviews(rng.random_range(0..500))
                .with_rating(rng.random_range(1.0..5.0))
                .with_location(
                    39.9 + rng.random_range(-0.3..0.3),
                    32.8 + rng.random_range(-0.3..0.3),
                )
                .with_travel_time(rng.random_range(3..60))
                .with_external_id(i.to_string())
        })
        .collect()
}

fn constraints() -> SelectionConstraints {
    SelectionConstraints::new("Italian", 200.0, 30.0, 39.888470, 32.827494)
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    for &n in &[100usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(n);
        let query = constraints();
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, cat| {
            b.iter(|| black_box(greedy_search(black_box(cat), &query)))
        });
    }
    group.finish();
}

fn bench_genetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("genetic");
    group.sample_size(10);

    for (n, pop, gen) in [(100usize, 20usize, 50usize), (1_000, 20, 50), (1_000, 60, 100)] {
        let catalog = synthetic_catalog(n);
        let query = constraints();
        let config = GeneticConfig::default()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(catalog, config),
            |b, (cat, cfg)| {
                b.iter(|| black_box(GeneticSearch::run(black_box(cat), &query, black_box(cfg))))
            },
        );
    }
    group.finish();
}

fn bench_top_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_n");
    for &n in &[100usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(n);
        let query = constraints();
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, cat| {
            b.iter(|| black_box(top_n(black_box(cat), 10, &query)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_genetic, bench_top_n);
criterion_main!(benches);
