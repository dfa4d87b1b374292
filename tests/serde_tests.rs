#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! A collection serializes as a map in its current iteration order, which is
//! how callers turn the exported mapping into a transport format.

use ordmap_collection::collection::Collection;
use rstest::rstest;

#[rstest]
fn test_collection_serializes_in_insertion_order() {
    let collection: Collection<&str, i32> = [("b", 2), ("a", 1), ("c", 3)].into();
    let json = serde_json::to_string(&collection).unwrap();
    assert_eq!(json, r#"{"b":2,"a":1,"c":3}"#);
}

#[rstest]
fn test_collection_serializes_sorted_order() {
    let mut collection: Collection<String, i32> = [("x", 3), ("y", 1), ("z", 2)]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    collection.sort();
    let json = serde_json::to_string(&collection).unwrap();
    assert_eq!(json, r#"{"y":1,"z":2,"x":3}"#);
}

#[rstest]
fn test_collection_json_roundtrip() {
    let collection: Collection<String, Vec<u8>> = (0..5u8)
        .rev()
        .map(|index| (format!("key{index}"), vec![index; usize::from(index)]))
        .collect();
    let json = serde_json::to_string(&collection).unwrap();
    let restored: Collection<String, Vec<u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(collection, restored);
}

#[rstest]
fn test_empty_collection_roundtrip() {
    let collection: Collection<String, i32> = Collection::new();
    let json = serde_json::to_string(&collection).unwrap();
    assert_eq!(json, "{}");
    let restored: Collection<String, i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_deserialize_rejects_non_map() {
    let result: Result<Collection<String, i32>, _> = serde_json::from_str("[1, 2, 3]");
    assert!(result.is_err());
}
