//! # Batchmark: mutation-batch strategy benchmark
//!
//! Batchmark measures how two storage representations and five concurrency
//! strategies affect the cost of applying mutation batches to a large
//! in-memory dataset of fixed-size numeric records and aggregating a
//! per-record statistic.
//!
//! - **Storage**: [`storage::ValueStore`] owns records by value (in-place
//!   mutate, deep clone); [`storage::HandleStore`] holds them behind shared
//!   handles (copy-on-write mutate, cheap clone).
//! - **Strategies**: sequential and thread-striped runs with and without a
//!   per-batch reset, plus a rayon data-parallel run. See [`Strategy`].
//! - **Harness**: [`harness::run_strategy`] wall-clocks one invocation and
//!   returns the per-batch aggregates with the elapsed time.
//!
//! ## Example
//!
//! ```rust,no_run
//! use batchmark::generate::{self, DatasetConfig, MutationConfig};
//! use batchmark::{harness, Strategy, ValueModel};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let dataset = generate::generate_dataset(&DatasetConfig::default(), &mut rng)?;
//! let batches = generate::generate_batches(&MutationConfig::default(), &mut rng)?;
//!
//! let base = ValueModel::new(&dataset);
//! let outcome = harness::run_strategy(Strategy::DataParallel, &base, &batches)?;
//! println!("{:.3}s for {} batches", outcome.elapsed_secs(), outcome.results.len());
//! # Ok::<(), batchmark::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod generate;
pub mod harness;
pub mod model;
pub mod record;
pub mod storage;
pub mod strategy;

pub use error::{Error, Result};
pub use harness::BenchmarkOutcome;
pub use model::{Aggregate, HandleModel, Model, MutationBatch, PointMutation, ValueModel};
pub use record::Record;
pub use strategy::{worker_count, Strategy};
