//! Execution-strategy benchmarks
//!
//! Times every strategy × storage combination on a reduced dataset so a full
//! criterion run stays in the seconds range. The release demo binary covers
//! the full-size configuration.
//!
//! Run with: cargo bench --bench strategies

use batchmark::generate::{self, DatasetConfig, MutationConfig};
use batchmark::{HandleModel, MutationBatch, Record, Strategy, ValueModel};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

const RECORDS: usize = 2_000;
const RECORD_LEN: usize = 16;
const BATCHES: usize = 16;
const STRIDE: usize = 10;

fn fixtures() -> (Vec<Record>, Vec<MutationBatch>) {
    let mut rng = StdRng::seed_from_u64(42);
    let dataset = generate::generate_dataset(
        &DatasetConfig {
            records: RECORDS,
            record_len: RECORD_LEN,
            ..DatasetConfig::default()
        },
        &mut rng,
    )
    .unwrap();
    let batches = generate::generate_batches(
        &MutationConfig {
            batches: BATCHES,
            mutations_per_batch: RECORDS / STRIDE,
            stride: STRIDE,
            record_len: RECORD_LEN,
            ..MutationConfig::default()
        },
        &mut rng,
    )
    .unwrap();
    (dataset, batches)
}

fn bench_value_storage(c: &mut Criterion) {
    let (dataset, batches) = fixtures();
    let base = ValueModel::new(&dataset);

    let mut group = c.benchmark_group("value_storage");
    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.label()),
            &strategy,
            |b, &strategy| {
                b.iter(|| strategy.execute(black_box(&base), black_box(&batches)).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_handle_storage(c: &mut Criterion) {
    let (dataset, batches) = fixtures();
    let base = HandleModel::new(&dataset);

    let mut group = c.benchmark_group("handle_storage");
    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.label()),
            &strategy,
            |b, &strategy| {
                b.iter(|| strategy.execute(black_box(&base), black_box(&batches)).unwrap());
            },
        );
    }
    group.finish();
}

/// The clone-cost asymmetry is the experiment's core; measure it directly.
fn bench_model_clone(c: &mut Criterion) {
    let (dataset, _) = fixtures();
    let value = ValueModel::new(&dataset);
    let handle = HandleModel::new(&dataset);

    let mut group = c.benchmark_group("model_clone");
    group.bench_function("value", |b| b.iter(|| black_box(&value).clone()));
    group.bench_function("handle", |b| b.iter(|| black_box(&handle).clone()));
    group.finish();
}

criterion_group!(
    benches,
    bench_value_storage,
    bench_handle_storage,
    bench_model_clone
);
criterion_main!(benches);
