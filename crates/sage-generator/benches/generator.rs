//! Benchmarks for puzzle generation.
//!
//! Measures full-grid solution generation and puzzle carving across fixed
//! seeds so runs are reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use sage_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_solution(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_solution", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || PuzzleGenerator::new(hint::black_box(*seed)),
                    |mut generator| generator.generate_solution(),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_puzzle(c: &mut Criterion) {
    for holes in [40, 55] {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_puzzle_{holes}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || PuzzleGenerator::new(hint::black_box(*seed)),
                        |mut generator| generator.generate_puzzle(holes),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_solution,
        bench_generate_puzzle
);
criterion_main!(benches);
