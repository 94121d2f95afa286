//! Fixed-length numeric records and their derived statistic.

use crate::{Error, Result};

/// A fixed-length vector of `f64` values.
///
/// The length is fixed at construction and never changes afterwards; a record
/// is only ever mutated wholesale, never partially. This is what makes the
/// value-store / handle-store comparison meaningful: a mutation is always
/// "replace one record's entire payload".
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Box<[f64]>,
}

impl Record {
    /// Create a record from a value sequence.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }

    /// Number of values in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the stored values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Replace the stored value sequence entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `new_values` differs in length
    /// from the sequence fixed at construction. On error the record is left
    /// unchanged.
    pub fn mutate(&mut self, new_values: &[f64]) -> Result<()> {
        if new_values.len() != self.values.len() {
            return Err(Error::LengthMismatch {
                expected: self.values.len(),
                actual: new_values.len(),
            });
        }
        self.values.copy_from_slice(new_values);
        Ok(())
    }

    /// The derived per-record statistic: a perturbed root-mean-square,
    /// `sqrt(mean_i(v_i^2 + sin(v_i) + cos(v_i)))`.
    ///
    /// Pure and O(len). The sin/cos terms keep the computation from being
    /// optimized down to a pure dot product, so the benchmark measures
    /// realistic per-element arithmetic.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rms(&self) -> f64 {
        let sum: f64 = self
            .values
            .iter()
            .map(|&v| v.mul_add(v, v.sin() + v.cos()))
            .sum();
        (sum / self.values.len() as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutate_replaces_all_values() {
        let mut record = Record::new(vec![1.0, 2.0, 3.0]);
        record.mutate(&[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(record.values(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn mutate_rejects_length_mismatch() {
        let mut record = Record::new(vec![1.0, 2.0, 3.0]);
        let err = record.mutate(&[1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
        // Failed mutate leaves the record untouched
        assert_eq!(record.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn rms_matches_hand_computed_value() {
        let record = Record::new(vec![3.0, 4.0]);
        let expected = ((9.0 + 3.0_f64.sin() + 3.0_f64.cos() + 16.0 + 4.0_f64.sin()
            + 4.0_f64.cos())
            / 2.0)
            .sqrt();
        assert!((record.rms() - expected).abs() < 1e-12);
    }

    #[test]
    fn rms_of_zero_record_is_one() {
        // v = 0 contributes 0 + sin(0) + cos(0) = 1 per element
        let record = Record::new(vec![0.0; 16]);
        assert!((record.rms() - 1.0).abs() < 1e-12);
    }
}
