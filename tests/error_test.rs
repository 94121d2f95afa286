//! Tests for error types

use batchmark::Error;

#[test]
fn test_index_out_of_range_error() {
    let error = Error::IndexOutOfRange { index: 12, len: 10 };
    let error_str = format!("{error}");
    assert!(error_str.contains("record index 12 out of range"));
    assert!(error_str.contains("10 records"));
}

#[test]
fn test_length_mismatch_error() {
    let error = Error::LengthMismatch {
        expected: 16,
        actual: 4,
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("length mismatch"));
    assert!(error_str.contains("expected 16"));
    assert!(error_str.contains("got 4"));
}

#[test]
fn test_empty_store_error() {
    let error = Error::EmptyStore;
    let error_str = format!("{error}");
    assert!(error_str.contains("empty record store"));
}

#[test]
fn test_invalid_config_error() {
    let error = Error::InvalidConfig("normal(10, -1): invalid std-dev".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("invalid generator configuration"));
    assert!(error_str.contains("std-dev"));
}
