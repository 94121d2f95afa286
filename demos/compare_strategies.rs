//! Full strategy × storage comparison grid.
//!
//! Generates a dataset and a mutation-batch set, then times every execution
//! strategy against both storage strategies and prints the elapsed wall-clock
//! times. Pass `--json` to also dump the outcomes as JSON for downstream
//! tooling.
//!
//! Run with: cargo run --release --example compare_strategies

use anyhow::Result;
use batchmark::generate::{self, DatasetConfig, MutationConfig};
use batchmark::{harness, worker_count, BenchmarkOutcome, HandleModel, Strategy, ValueModel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Entry {
    strategy: &'static str,
    storage: &'static str,
    #[serde(flatten)]
    outcome: BenchmarkOutcome,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let json = std::env::args().any(|arg| arg == "--json");

    let dataset_config = DatasetConfig::default();
    let mutation_config = MutationConfig::default();

    println!("Workers available: {}", worker_count());
    println!(
        "Records: {}, record length: {}, batches: {}, mutations per batch: {}\n",
        dataset_config.records,
        dataset_config.record_len,
        mutation_config.batches,
        mutation_config.mutations_per_batch,
    );

    let mut rng = StdRng::from_entropy();
    let dataset = generate::generate_dataset(&dataset_config, &mut rng)?;
    let batches = generate::generate_batches(&mutation_config, &mut rng)?;

    let value_base = ValueModel::new(&dataset);
    let handle_base = HandleModel::new(&dataset);

    let mut entries = Vec::new();
    for strategy in Strategy::ALL {
        let outcome = harness::run_strategy(strategy, &value_base, &batches)?;
        report(strategy, "value", &outcome);
        entries.push(Entry {
            strategy: strategy.label(),
            storage: "value",
            outcome,
        });

        let outcome = harness::run_strategy(strategy, &handle_base, &batches)?;
        report(strategy, "handle", &outcome);
        entries.push(Entry {
            strategy: strategy.label(),
            storage: "handle",
            outcome,
        });
        println!();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }
    Ok(())
}

fn report(strategy: Strategy, storage: &str, outcome: &BenchmarkOutcome) {
    println!(
        "{:>22} / {:<6} {:>9.4}s  (first batch mean {:.4})",
        strategy.label(),
        storage,
        outcome.elapsed_secs(),
        outcome.results.first().map_or(f64::NAN, |r| r.mean),
    );
}
