//! Tests for the mutation factory functions and their timestamp contracts.

use chrono::{TimeZone, Utc};
use fieldpath::mutation::{Mutation, MutationError, MutationOp, TimestampRange, timestamp_micros};

#[test]
fn test_empty_nonzero_range_is_rejected() {
    let result = Mutation::delete_from_column("cf", "col", 5, 5);
    assert!(matches!(
        result,
        Err(MutationError::InvalidTimestampRange { begin: 5, end: 5, .. })
    ));
}

#[test]
fn test_zero_range_is_unbounded() {
    let mutation = Mutation::delete_from_column("cf", "col", 0, 0).unwrap();
    assert_eq!(mutation, Mutation::delete_from_column_all("cf", "col"));
}

#[test]
fn test_inverted_range_is_rejected() {
    assert!(Mutation::delete_from_column("cf", "col", 10, 5).is_err());
    // A zero end is unbounded, not "before" the start
    assert!(Mutation::delete_from_column("cf", "col", 10, 0).is_ok());
}

#[test]
fn test_half_bounded_variants() {
    let from = Mutation::delete_from_column_starting_from("cf", "col", 100).unwrap();
    let until = Mutation::delete_from_column_ending_at("cf", "col", 100).unwrap();

    match (&from.op, &until.op) {
        (
            MutationOp::DeleteFromColumn { time_range: a, .. },
            MutationOp::DeleteFromColumn { time_range: b, .. },
        ) => {
            assert!(a.contains(100) && a.contains(i64::MAX) && !a.contains(99));
            assert!(b.contains(0) && b.contains(99) && !b.contains(100));
        }
        other => panic!("Expected column deletes, got {other:?}"),
    }
}

#[test]
fn test_set_cell_with_wall_clock_timestamp() {
    let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mutation = Mutation::set_cell("cf", "col", timestamp_micros(time), "v");

    match mutation.op {
        MutationOp::SetCell { timestamp_micros: ts, .. } => {
            assert_eq!(ts % 1_000, 0);
            assert_eq!(ts / 1_000_000, time.timestamp());
        }
        other => panic!("Expected SetCell, got {other:?}"),
    }
}

#[test]
fn test_range_constructor_matches_factories() {
    assert!(TimestampRange::new(0, 0).is_ok());
    assert!(TimestampRange::new(1, 2).is_ok());
    assert!(TimestampRange::new(2, 2).is_err());
    assert!(TimestampRange::new(-1, 0).is_err());
}
