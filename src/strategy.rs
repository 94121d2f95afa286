//! Execution strategies.
//!
//! Each strategy takes a base model (read-only, never mutated directly) and a
//! set of mutation batches, and produces one [`Aggregate`] per batch, indexed
//! by original batch position regardless of completion or worker-assignment
//! order. The strategies differ in sequencing, in whether each batch starts
//! from a fresh duplicate of the base model, and in whether work is
//! parallelized:
//!
//! | Strategy              | Working models       | Reset per batch | Parallel |
//! |-----------------------|----------------------|-----------------|----------|
//! | `Sequential`          | 1                    | no              | no       |
//! | `SequentialReset`     | 1 (re-cloned)        | yes             | no       |
//! | `DataParallel`        | 1 per batch          | implicit        | rayon    |
//! | `ThreadStriped`       | 1 per worker         | no              | threads  |
//! | `ThreadStripedReset`  | 1 per worker         | yes             | threads  |
//!
//! The no-reset variants accumulate mutations across the batches a working
//! model sees, so their numbers depend on how batches are partitioned:
//! `Sequential` folds every batch into one model, while `ThreadStriped`
//! accumulates independently inside each worker's round-robin stripe. That
//! makes `ThreadStriped` results depend on the worker count. This is the
//! intended experiment, not a defect.

use crate::model::{Aggregate, Model, MutationBatch};
use crate::storage::RecordStore;
use crate::Result;
use rayon::prelude::*;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;
use tracing::debug;

/// The closed set of execution strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One working model, batches applied one after another, mutations
    /// accumulating across batches.
    Sequential,
    /// Working model reset to a fresh duplicate of the base before each batch.
    SequentialReset,
    /// Each batch processed concurrently on its own duplicate of the base
    /// (reset is implicit in the per-batch duplication).
    DataParallel,
    /// Fixed worker threads, batch indices striped round-robin, each worker
    /// accumulating mutations across its own stripe. Results depend on the
    /// worker count; preserved as intentional experimental behavior.
    ThreadStriped,
    /// Same striping, but every batch starts from a fresh duplicate.
    ThreadStripedReset,
}

impl Strategy {
    /// All five strategies, in comparison order.
    pub const ALL: [Self; 5] = [
        Self::Sequential,
        Self::SequentialReset,
        Self::DataParallel,
        Self::ThreadStriped,
        Self::ThreadStripedReset,
    ];

    /// Stable label for reports and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::SequentialReset => "sequential-reset",
            Self::DataParallel => "data-parallel",
            Self::ThreadStriped => "thread-striped",
            Self::ThreadStripedReset => "thread-striped-reset",
        }
    }

    /// Run this strategy against `base`, producing one aggregate per batch in
    /// batch order.
    ///
    /// # Errors
    ///
    /// Propagates the first mutate/aggregate error and aborts the invocation;
    /// partial results are discarded.
    pub fn execute<S: RecordStore>(
        self,
        base: &Model<S>,
        batches: &[MutationBatch],
    ) -> Result<Vec<Aggregate>> {
        match self {
            Self::Sequential => run_sequential(base, batches, false),
            Self::SequentialReset => run_sequential(base, batches, true),
            Self::DataParallel => run_data_parallel(base, batches),
            Self::ThreadStriped => run_thread_striped(base, batches, false),
            Self::ThreadStripedReset => run_thread_striped(base, batches, true),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Worker count for the thread-striped strategies: the platform's reported
/// hardware parallelism, at least 1.
#[must_use]
pub fn worker_count() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

fn run_sequential<S: RecordStore>(
    base: &Model<S>,
    batches: &[MutationBatch],
    reset: bool,
) -> Result<Vec<Aggregate>> {
    let mut results = Vec::with_capacity(batches.len());
    let mut model = base.clone();
    for batch in batches {
        if reset {
            model = base.clone();
        }
        model.apply(batch)?;
        results.push(model.calculate()?);
    }
    Ok(results)
}

fn run_data_parallel<S: RecordStore>(
    base: &Model<S>,
    batches: &[MutationBatch],
) -> Result<Vec<Aggregate>> {
    // Indexed parallel collect: rayon scatters each batch's aggregate to its
    // batch position, so output order never depends on completion order.
    batches
        .par_iter()
        .map(|batch| {
            let mut model = base.clone();
            model.apply(batch)?;
            model.calculate()
        })
        .collect()
}

fn run_thread_striped<S: RecordStore>(
    base: &Model<S>,
    batches: &[MutationBatch],
    reset: bool,
) -> Result<Vec<Aggregate>> {
    striped_with_workers(base, batches, reset, worker_count())
}

fn striped_with_workers<S: RecordStore>(
    base: &Model<S>,
    batches: &[MutationBatch],
    reset: bool,
    workers: usize,
) -> Result<Vec<Aggregate>> {
    debug!(workers, batches = batches.len(), reset, "thread-striped run");

    let mut results = vec![Aggregate::default(); batches.len()];

    // Deal exclusive references to the result slots round-robin, so worker w
    // owns exactly the slots for batches w, w+W, w+2W, ... Workers write
    // straight into the shared result vector through disjoint slots; no lock,
    // no append-by-completion.
    let mut stripes: Vec<Vec<&mut Aggregate>> = (0..workers).map(|_| Vec::new()).collect();
    for (index, slot) in results.iter_mut().enumerate() {
        stripes[index % workers].push(slot);
    }

    thread::scope(|scope| -> Result<()> {
        let handles: Vec<_> = stripes
            .into_iter()
            .enumerate()
            .map(|(worker, stripe)| {
                scope.spawn(move || -> Result<()> {
                    let mut model = base.clone();
                    for (step, slot) in stripe.into_iter().enumerate() {
                        if reset {
                            model = base.clone();
                        }
                        model.apply(&batches[worker + step * workers])?;
                        *slot = model.calculate()?;
                    }
                    Ok(())
                })
            })
            .collect();

        for handle in handles {
            handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
        }
        Ok(())
    })?;

    Ok(results)
}
