//! Dataset and mutation-batch generators.
//!
//! Both generators sample a root-mean-square magnitude from a normal
//! distribution and expand it deterministically into a fixed-length value
//! sequence over a cosine basis. The RNG is always injected so tests can pin
//! a seed; nothing here touches system entropy.

use crate::model::{MutationBatch, PointMutation};
use crate::{Error, Record, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Shape of the generated dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    /// Number of records to generate.
    pub records: usize,
    /// Values per record.
    pub record_len: usize,
    /// Mean of the sampled magnitude.
    pub mean: f64,
    /// Standard deviation of the sampled magnitude.
    pub std_dev: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            records: 100_000,
            record_len: 16,
            mean: 10.0,
            std_dev: 1.0,
        }
    }
}

/// Shape of the generated mutation-batch set.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationConfig {
    /// Number of independent batches.
    pub batches: usize,
    /// Point mutations per batch.
    pub mutations_per_batch: usize,
    /// Index stride between consecutive mutations (mutation i targets
    /// `i * stride`).
    pub stride: usize,
    /// Values per replacement sequence.
    pub record_len: usize,
    /// Mean of the sampled magnitude.
    pub mean: f64,
    /// Standard deviation of the sampled magnitude.
    pub std_dev: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            batches: 128,
            mutations_per_batch: 10_000,
            stride: 10,
            record_len: 16,
            mean: 100.0,
            std_dev: 10.0,
        }
    }
}

/// Expand a magnitude into `len` values over a cosine basis:
/// `value[i] = rms * sqrt(2) * cos(2π i / len)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cosine_series(rms: f64, len: usize) -> Vec<f64> {
    let amplitude = rms * 2.0_f64.sqrt();
    (0..len)
        .map(|i| amplitude * (2.0 * PI * i as f64 / len as f64).cos())
        .collect()
}

fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std_dev)
        .map_err(|e| Error::InvalidConfig(format!("normal({mean}, {std_dev}): {e}")))
}

/// Generate a dataset of `config.records` records.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the distribution parameters are
/// rejected (negative or non-finite std-dev).
pub fn generate_dataset<R: Rng + ?Sized>(
    config: &DatasetConfig,
    rng: &mut R,
) -> Result<Vec<Record>> {
    let norm = normal(config.mean, config.std_dev)?;
    Ok((0..config.records)
        .map(|_| Record::new(cosine_series(norm.sample(rng), config.record_len)))
        .collect())
}

/// Generate a set of independent mutation batches.
///
/// Mutation `i` of every batch targets index `i * stride`; the replacement
/// values are drawn fresh for every mutation. Indices are not validated here;
/// a config whose `mutations_per_batch * stride` exceeds the dataset size
/// surfaces as an out-of-range error when the batch is applied.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the distribution parameters are
/// rejected.
pub fn generate_batches<R: Rng + ?Sized>(
    config: &MutationConfig,
    rng: &mut R,
) -> Result<Vec<MutationBatch>> {
    let norm = normal(config.mean, config.std_dev)?;
    Ok((0..config.batches)
        .map(|_| {
            (0..config.mutations_per_batch)
                .map(|i| PointMutation {
                    index: i * config.stride,
                    values: cosine_series(norm.sample(rng), config.record_len),
                })
                .collect()
        })
        .collect())
}
