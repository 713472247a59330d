//! Criterion benchmarks for the evolution engine.
//!
//! Measures pure engine overhead on the phrase task: population
//! evaluation, one evolve step (via a single-generation bounded run), and
//! a full seeded solve of a short phrase.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evosolve::{phrase, EvolutionTask, SolverConfig};

const GENE_POOL: &str = "abcdefghijklmnopqrstuvwxyz ";

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for &size in &[50usize, 200, 500] {
        let task = phrase::PhraseTask::new("the quick brown fox", GENE_POOL).unwrap();
        let chromosome: Vec<char> = "the quick brown fox".chars().collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(task.evaluate(black_box(&chromosome)).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_single_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_generation");
    for &size in &[50usize, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let config = SolverConfig::default()
                    .with_phrase("the quick brown fox")
                    .with_gene_pool(GENE_POOL)
                    .with_population_size(size)
                    .with_mutation_rate(5)
                    .with_seed(42)
                    .with_max_generations(1);
                let mut ga = phrase::solver_from_config(&config).unwrap();
                black_box(ga.run().unwrap());
            });
        });
    }
    group.finish();
}

fn bench_full_solve(c: &mut Criterion) {
    c.bench_function("solve_short_phrase", |b| {
        b.iter(|| {
            let config = SolverConfig::default()
                .with_phrase("gene")
                .with_gene_pool(GENE_POOL)
                .with_population_size(100)
                .with_mutation_rate(5)
                .with_seed(42)
                .with_max_generations(10_000);
            let mut ga = phrase::solver_from_config(&config).unwrap();
            black_box(ga.run().unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_single_generation,
    bench_full_solve
);
criterion_main!(benches);
