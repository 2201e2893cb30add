//! Tests for the records module

use super::*;
use std::sync::Arc;

fn sample() -> WideRecord {
    WideRecord::new("row-007")
        .with_cell("cf", "q1", 42i32.to_be_bytes())
        .with_cell("m", "k1", "v1")
        .with_cell("other", "x", "y")
        .with_cell("m", "k2", "v2")
}

#[test]
fn value_looks_up_by_family_and_qualifier() {
    let record = sample();

    assert_eq!(record.row_id(), b"row-007");
    assert_eq!(record.value(b"cf", b"q1"), Some(&[0, 0, 0, 42][..]));
    assert_eq!(record.value(b"m", b"k1"), Some(&b"v1"[..]));
    assert_eq!(record.value(b"cf", b"k1"), None);
    assert_eq!(record.value(b"missing", b"q1"), None);
}

#[test]
fn qualifiers_and_values_lists_one_family_in_order() {
    let record = sample();

    let cells: Vec<_> = record.qualifiers_and_values(b"m").collect();
    assert_eq!(
        cells,
        vec![(&b"k1"[..], &b"v1"[..]), (&b"k2"[..], &b"v2"[..])]
    );
    assert_eq!(record.qualifiers_and_values(b"none").count(), 0);
}

#[test]
fn put_replaces_in_place() {
    let mut record = sample();

    assert_eq!(record.put("m", "k1", "v9"), Some(b"v1".to_vec()));
    assert_eq!(record.put("m", "k3", "v3"), None);
    assert_eq!(record.len(), 5);

    let qualifiers: Vec<_> = record.qualifiers_and_values(b"m").map(|(q, _)| q).collect();
    assert_eq!(qualifiers, vec![&b"k1"[..], &b"k2"[..], &b"k3"[..]]);
    assert_eq!(record.value(b"m", b"k1"), Some(&b"v9"[..]));
}

#[test]
fn remove_and_reset() {
    let mut record = sample();

    assert_eq!(record.remove(b"other", b"x"), Some(b"y".to_vec()));
    assert_eq!(record.remove(b"other", b"x"), None);

    record.reset(b"row-008");
    assert_eq!(record.row_id(), b"row-008");
    assert!(record.is_empty());
}

#[test]
fn from_iter_collapses_duplicate_addresses() {
    let record: WideRecord = vec![
        Cell::new("m", "k1", "a"),
        Cell::new("m", "k1", "b"),
        Cell::new("m", "k2", "c"),
    ]
    .into_iter()
    .collect();

    assert_eq!(record.len(), 2);
    assert_eq!(record.value(b"m", b"k1"), Some(&b"b"[..]));
}

#[test]
fn shared_handles_delegate_to_the_record() {
    let record = Arc::new(sample());
    let by_ref: &WideRecord = &record;

    assert_eq!(RawRecord::row_id(&record), b"row-007");
    assert_eq!(RawRecord::value(&by_ref, b"m", b"k2"), Some(&b"v2"[..]));
    assert_eq!(record.qualifiers_and_values(b"m").count(), 2);
}
