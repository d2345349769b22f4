//! Comparison protocol tests: totality, antisymmetry, and natural ordering

use std::cmp::Ordering;

use quickbeam::*;

fn sample_values() -> Vec<Object> {
    vec![
        Object::null(),
        Object::integer(-1),
        Object::integer(0),
        Object::integer(5),
        Object::string(""),
        Object::string("a"),
        Object::string("ab"),
        Object::list(vec![]),
        Object::list(vec![Object::integer(1)]),
        Object::list(vec![Object::integer(1), Object::integer(2)]),
        Object::dict(),
        Object::function(
            Object::list(vec![]),
            NodeHandle::new(1),
            ScriptHandle::new(1),
        ),
    ]
}

#[test]
fn test_antisymmetry_over_sample() {
    let values = sample_values();
    for a in &values {
        for b in &values {
            assert_eq!(
                a.compare(b),
                b.compare(a).reverse(),
                "compare({:?}, {:?}) is not antisymmetric",
                a,
                b
            );
        }
    }
}

#[test]
fn test_transitivity_over_sample() {
    let values = sample_values();
    for a in &values {
        for b in &values {
            for c in &values {
                if a.compare(b) == Ordering::Less && b.compare(c) == Ordering::Less {
                    assert_eq!(a.compare(c), Ordering::Less);
                }
            }
        }
    }
}

#[test]
fn test_reflexivity_over_sample() {
    for value in &sample_values() {
        assert_eq!(value.compare(value), Ordering::Equal);
    }
}

#[test]
fn test_equal_content_distinct_instances() {
    assert_eq!(Object::integer(5), Object::integer(5));
    assert_eq!(Object::string("ab"), Object::string("ab"));
    assert_eq!(
        Object::list(vec![Object::integer(1)]),
        Object::list(vec![Object::integer(1)])
    );
}

#[test]
fn test_natural_order_within_kinds() {
    assert!(Object::integer(-1) < Object::integer(0));
    assert!(Object::integer(0) < Object::integer(5));
    assert!(Object::string("") < Object::string("a"));
    assert!(Object::string("a") < Object::string("ab"));
    assert!(Object::list(vec![]) < Object::list(vec![Object::integer(1)]));
}

#[test]
fn test_kind_order_is_total_across_kinds() {
    // null < integer < string < dict < list < function, regardless of
    // payload contents.
    assert!(Object::null() < Object::integer(i64::MIN));
    assert!(Object::integer(i64::MAX) < Object::string(""));
    assert!(Object::string("zzz") < Object::dict());
    assert!(Object::dict() < Object::list(vec![]));
    assert!(
        Object::list(vec![])
            < Object::function(
                Object::list(vec![]),
                NodeHandle::new(0),
                ScriptHandle::new(0)
            )
    );
}

#[test]
fn test_functions_compare_by_identity() {
    let args = Object::list(vec![]);
    let f = Object::function(args.clone(), NodeHandle::new(3), ScriptHandle::new(4));
    let g = Object::function(args, NodeHandle::new(3), ScriptHandle::new(4));
    assert_eq!(f.compare(&f.clone()), Ordering::Equal);
    assert_ne!(f.compare(&g), Ordering::Equal);
}
