//! Serde round-trip tests for `OrderedSet`.
//!
//! The set serializes as a plain JSON array in ascending order and
//! deserializes by inserting each element, so unsorted or duplicated input
//! still yields a valid set.

use ordset::OrderedSet;
use rstest::rstest;

#[rstest]
fn test_serialize_as_sorted_sequence() {
    let set: OrderedSet<i32> = [5, 1, 3].into_iter().collect();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[1,3,5]");
}

#[rstest]
fn test_serialize_empty_set() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
}

#[rstest]
fn test_deserialize_sorted_input() {
    let set: OrderedSet<i32> = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(set.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_deserialize_unsorted_input_sorts() {
    let set: OrderedSet<i32> = serde_json::from_str("[5,1,3]").unwrap();
    assert_eq!(set.as_slice(), &[1, 3, 5]);
}

#[rstest]
fn test_deserialize_duplicated_input_deduplicates() {
    let set: OrderedSet<i32> = serde_json::from_str("[3,1,3,3,2]").unwrap();
    assert_eq!(set.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_round_trip_preserves_contents() {
    let original: OrderedSet<String> = ["Juan", "Pedro", "Ana"]
        .into_iter()
        .map(String::from)
        .collect();

    let json = serde_json::to_string(&original).unwrap();
    let restored: OrderedSet<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
}
