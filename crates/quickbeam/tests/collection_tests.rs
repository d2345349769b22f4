//! End-to-end list and dictionary behavior

use quickbeam::*;

#[test]
fn test_list_holes_from_construction() {
    let list = Object::list_with_holes(3);
    assert_eq!(list.len(), 3);
    for index in 0..3 {
        assert!(list.list_get(index).is_none());
    }
}

#[test]
fn test_list_gap_fill_growth() {
    let list = Object::list_with_holes(3);
    list.list_set(5, Object::integer(7));
    assert_eq!(list.len(), 6);
    assert!(list.list_get(3).is_none());
    assert!(list.list_get(4).is_none());
    assert_eq!(list.list_get(5).and_then(|v| v.as_i64()), Some(7));
}

#[test]
fn test_list_iteration_visits_only_live_elements() {
    let list = Object::list_with_holes(5);
    list.list_set(1, Object::integer(10));
    list.list_set(3, Object::integer(30));
    let seen: Vec<i64> = list.list_iter().filter_map(|v| v.as_i64()).collect();
    assert_eq!(seen, vec![10, 30]);
}

#[test]
fn test_list_concat_in_place() {
    let left = Object::list(vec![Object::integer(1), Object::integer(2)]);
    let right = Object::list(vec![Object::integer(3)]);
    left.list_extend(&right);
    let seen: Vec<i64> = left.list_iter().filter_map(|v| v.as_i64()).collect();
    assert_eq!(seen, vec![1, 2, 3]);
    // The source is untouched.
    assert_eq!(right.len(), 1);
}

#[test]
fn test_dict_rejects_container_keys() {
    let dict = Object::dict();
    for bad_key in [Object::list(vec![]), Object::dict(), Object::null()] {
        let kind = bad_key.kind();
        let err = dict.dict_set(bad_key, Object::integer(1)).unwrap_err();
        match err {
            QuickbeamError::InvalidDictKey(k) => assert_eq!(k, kind),
            other => panic!("unexpected error: {}", other),
        }
    }
    assert_eq!(dict.len(), 0);
}

#[test]
fn test_dict_insertion_order_survives_merge() {
    let config = Object::dict();
    config
        .dict_set(Object::string("host"), Object::string("localhost"))
        .unwrap();
    config
        .dict_set(Object::string("port"), Object::integer(80))
        .unwrap();

    let overrides = Object::dict();
    overrides
        .dict_set(Object::string("port"), Object::integer(8080))
        .unwrap();
    overrides
        .dict_set(Object::string("debug"), Object::integer(1))
        .unwrap();

    config.dict_merge(&overrides).unwrap();

    let keys: Vec<String> = config
        .dict_iter()
        .map(|k| k.unwrap().as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, vec!["host", "port", "debug"]);
    assert_eq!(
        config
            .dict_get(&Object::string("port"))
            .and_then(|v| v.as_i64()),
        Some(8080)
    );
}

#[test]
fn test_dict_iteration_guard_scenario() {
    // The spec'd scenario: insert "a", start iterating, insert "b" — the
    // next step must refuse. Replacing "a"'s value must not trip it.
    let dict = Object::dict();
    dict.dict_set(Object::string("a"), Object::integer(1)).unwrap();

    let mut iter = dict.dict_iter();
    dict.dict_set(Object::string("b"), Object::integer(2)).unwrap();
    assert!(matches!(iter.next_key(), Err(QuickbeamError::DictModified)));

    let mut iter = dict.dict_iter();
    dict.dict_set(Object::string("a"), Object::integer(2)).unwrap();
    assert_eq!(iter.next_key().unwrap().unwrap().as_str(), Some("a"));
    assert_eq!(iter.next_key().unwrap().unwrap().as_str(), Some("b"));
    assert!(iter.next_key().unwrap().is_none());
}

#[test]
fn test_dict_slot_assignment_during_iteration() {
    // Compound assignment through a slot is value-only and keeps live
    // iterators valid.
    let dict = Object::dict();
    let slot = dict
        .dict_set(Object::string("count"), Object::integer(0))
        .unwrap();

    let mut iter = dict.dict_iter();
    dict.dict_assign(slot, Object::integer(1));
    assert_eq!(iter.next_key().unwrap().unwrap().as_str(), Some("count"));
    assert_eq!(
        dict.dict_get(&Object::string("count"))
            .and_then(|v| v.as_i64()),
        Some(1)
    );
}

#[test]
fn test_dict_from_shares_entries() {
    let source = Object::dict();
    let value = Object::list(vec![]);
    source
        .dict_set(Object::string("v"), value.clone())
        .unwrap();

    let copy = Object::dict_from(&source);
    assert_eq!(copy.len(), 1);
    assert!(copy
        .dict_get(&Object::string("v"))
        .unwrap()
        .ptr_eq(&value));

    // Fresh container: inserting into the copy leaves the source alone.
    copy.dict_set(Object::string("w"), Object::null()).unwrap();
    assert_eq!(source.len(), 1);
}

#[test]
fn test_iterator_holds_its_container_alive() {
    let dict = Object::dict();
    dict.dict_set(Object::integer(1), Object::string("one"))
        .unwrap();
    let mut iter = dict.dict_iter();
    drop(dict);
    assert_eq!(iter.next_key().unwrap().unwrap().as_i64(), Some(1));
    assert!(iter.next_key().unwrap().is_none());
}
