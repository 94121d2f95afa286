//! Record storage strategies.
//!
//! Two stores hold the same records under different ownership disciplines:
//!
//! - [`ValueStore`] owns records directly in a contiguous vector. Mutation is
//!   an in-place overwrite: O(1), no allocation. Duplicating the store copies
//!   every record.
//! - [`HandleStore`] holds records behind reference-counted, immutably-shared
//!   handles (`Arc<Record>`). Mutation copies the current record, applies the
//!   change to the copy, and publishes a fresh handle; the old handle is never
//!   written through, so readers holding it keep a consistent view. Duplicating
//!   the store copies only the handles.
//!
//! That cost asymmetry (deep clone vs handle clone, free mutate vs
//! allocate-per-mutate) is the whole point of the benchmark and must be
//! preserved by any change here.

use crate::{Error, Record, Result};
use std::sync::Arc;

/// Common interface over the two storage strategies.
///
/// `Clone` is the "duplicate for reset" operation used by the execution
/// strategies; its cost differs by implementor as described in the module
/// docs. `Send + Sync` lets a store be shared read-only across worker
/// threads and cloned into them.
pub trait RecordStore: Clone + Send + Sync {
    /// Build a store holding a copy of every record in `dataset`.
    fn from_records(dataset: &[Record]) -> Self;

    /// Number of records held.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<&Record>;

    /// Replace the entire value sequence of the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`, or
    /// [`Error::LengthMismatch`] if `values` has the wrong length. A failed
    /// mutate leaves every record unchanged.
    fn mutate(&mut self, index: usize, values: &[f64]) -> Result<()>;
}

/// Store owning records by value in a contiguous vector.
#[derive(Debug, Clone)]
pub struct ValueStore {
    records: Vec<Record>,
}

impl RecordStore for ValueStore {
    fn from_records(dataset: &[Record]) -> Self {
        Self {
            records: dataset.to_vec(),
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    fn mutate(&mut self, index: usize, values: &[f64]) -> Result<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        record.mutate(values)
    }
}

/// Store holding records behind shared, immutable handles.
///
/// Mutation never writes through an existing handle: it publishes a new one.
/// `Clone` copies handles only, so duplicating a `HandleStore` is cheap no
/// matter how large the records are.
#[derive(Debug, Clone)]
pub struct HandleStore {
    records: Vec<Arc<Record>>,
}

impl HandleStore {
    /// Cloned handle to the record at `index`, for readers that must keep a
    /// stable view across later mutations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn handle(&self, index: usize) -> Result<Arc<Record>> {
        self.records
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }
}

impl RecordStore for HandleStore {
    fn from_records(dataset: &[Record]) -> Self {
        Self {
            records: dataset.iter().cloned().map(Arc::new).collect(),
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Result<&Record> {
        self.records
            .get(index)
            .map(Arc::as_ref)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    fn mutate(&mut self, index: usize, values: &[f64]) -> Result<()> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        // Copy-on-write: mutate a private copy, then publish it as a new
        // handle. The old handle stays valid for any reader still holding it.
        let mut next = Record::clone(slot);
        next.mutate(values)?;
        *slot = Arc::new(next);
        Ok(())
    }
}
