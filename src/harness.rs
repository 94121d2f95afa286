//! Timed strategy invocation.
//!
//! The harness does exactly one thing: wall-clock one strategy invocation and
//! package the elapsed time with the produced aggregates. No retry, no
//! cancellation, no warm-up; callers that want repetitions drive the harness
//! themselves (or use the criterion benches).

use crate::model::{Aggregate, Model, MutationBatch};
use crate::storage::RecordStore;
use crate::{Result, Strategy};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Elapsed time and per-batch aggregates of one strategy invocation.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkOutcome {
    /// Wall-clock duration of the invocation.
    pub elapsed: Duration,
    /// One aggregate per mutation batch, in batch order.
    pub results: Vec<Aggregate>,
    /// When the invocation finished.
    pub recorded_at: DateTime<Utc>,
}

impl BenchmarkOutcome {
    /// Elapsed time in seconds, for reports.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Time one invocation of an arbitrary strategy function.
///
/// The strategy may clone and mutate its own working state but receives the
/// base model and batch set read-only.
///
/// # Errors
///
/// Propagates any error the strategy returns; a failed invocation produces no
/// outcome.
pub fn run<S, F>(
    strategy: F,
    base: &Model<S>,
    batches: &[MutationBatch],
) -> Result<BenchmarkOutcome>
where
    S: RecordStore,
    F: FnOnce(&Model<S>, &[MutationBatch]) -> Result<Vec<Aggregate>>,
{
    let started = Instant::now();
    let results = strategy(base, batches)?;
    let elapsed = started.elapsed();
    Ok(BenchmarkOutcome {
        elapsed,
        results,
        recorded_at: Utc::now(),
    })
}

/// Time one invocation of a named [`Strategy`].
///
/// # Errors
///
/// Propagates any error the strategy returns.
pub fn run_strategy<S: RecordStore>(
    strategy: Strategy,
    base: &Model<S>,
    batches: &[MutationBatch],
) -> Result<BenchmarkOutcome> {
    let outcome = run(|base, batches| strategy.execute(base, batches), base, batches)?;
    debug!(
        strategy = strategy.label(),
        elapsed_secs = outcome.elapsed_secs(),
        batches = outcome.results.len(),
        "strategy timed"
    );
    Ok(outcome)
}
