//! Aggregation model over a record store.
//!
//! A [`Model`] owns exactly one store and is the unit of duplication between
//! mutation batches: `Clone` on a model is the "reset" the execution
//! strategies rely on, and its cost is the store's cost (deep copy for
//! [`ValueStore`](crate::storage::ValueStore), handle copy for
//! [`HandleStore`](crate::storage::HandleStore)).

use crate::storage::RecordStore;
use crate::{Error, Record, Result};
use serde::{Deserialize, Serialize};

/// One point mutation: replace the whole value sequence of one record.
///
/// Invariant: `index` must address a record of the target model; violations
/// surface as [`Error::IndexOutOfRange`] when the mutation is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMutation {
    /// Index of the record to replace.
    pub index: usize,
    /// Replacement value sequence (must match the record length).
    pub values: Vec<f64>,
}

/// One scenario: an ordered sequence of point mutations.
///
/// Later entries targeting the same index win when the batch is applied.
pub type MutationBatch = Vec<PointMutation>;

/// Aggregate of the per-record statistic over every record of a model at one
/// point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Smallest per-record statistic.
    pub min: f64,
    /// Largest per-record statistic.
    pub max: f64,
    /// Arithmetic mean of the statistic.
    pub mean: f64,
    /// Sum of the statistic.
    pub sum: f64,
}

/// Aggregation model wrapping one record store.
#[derive(Debug, Clone)]
pub struct Model<S> {
    store: S,
}

/// Model over value storage.
pub type ValueModel = Model<crate::storage::ValueStore>;
/// Model over handle (copy-on-write) storage.
pub type HandleModel = Model<crate::storage::HandleStore>;

impl<S: RecordStore> Model<S> {
    /// Build a model whose store holds a copy of `dataset`.
    #[must_use]
    pub fn new(dataset: &[Record]) -> Self {
        Self {
            store: S::from_records(dataset),
        }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Scan every record and aggregate its statistic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStore`] if the store holds no records, rather
    /// than letting the mean silently become NaN.
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate(&self) -> Result<Aggregate> {
        let len = self.store.len();
        if len == 0 {
            return Err(Error::EmptyStore);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for index in 0..len {
            let rms = self.store.get(index)?.rms();
            if rms < min {
                min = rms;
            }
            if rms > max {
                max = rms;
            }
            sum += rms;
        }

        Ok(Aggregate {
            min,
            max,
            mean: sum / len as f64,
            sum,
        })
    }

    /// Apply every point mutation in `batch`, in order.
    ///
    /// Sequential within the batch: a later mutation of the same index
    /// overrides an earlier one.
    ///
    /// # Errors
    ///
    /// Propagates the first store error and stops; mutations already applied
    /// stay applied (the model is mid-scenario state, not a transaction).
    pub fn apply(&mut self, batch: &MutationBatch) -> Result<()> {
        for mutation in batch {
            self.store.mutate(mutation.index, &mutation.values)?;
        }
        Ok(())
    }
}
