//! End-to-end behaviour of the public entry points.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::collections::BTreeSet;

use lockstep::{
    assert_iterable_matches, assert_iterable_matches_with_message,
    assert_iterable_matches_with_supplier, equals, MismatchKind,
};
use pretty_assertions::assert_eq;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn null_predicate() {
    let expected = vec!["x"];
    let actual = set(&["y"]);

    let err = assert_iterable_matches(
        None::<fn(&&str, &String) -> bool>,
        Some(expected),
        Some(actual),
    )
    .unwrap_err();

    assert!(err.is_precondition());
    assert_eq!(err.to_string(), "predicate must not be null");
}

#[test]
fn null_expected_and_actual() {
    let none = None::<Vec<String>>;

    assert_iterable_matches(Some(equals::<String, String>), none.clone(), none.clone()).unwrap();
    assert_iterable_matches_with_message(
        Some(equals::<String, String>),
        none.clone(),
        none.clone(),
        "message",
    )
    .unwrap();
    assert_iterable_matches_with_supplier(
        Some(equals::<String, String>),
        none.clone(),
        none,
        || "message".to_string(),
    )
    .unwrap();
}

#[test]
fn null_actual() {
    let err = assert_iterable_matches(
        Some(equals::<&str, String>),
        Some(vec!["x"]),
        None::<BTreeSet<String>>,
    )
    .unwrap_err();

    assert!(err.is_assertion());
    assert_eq!(err.to_string(), "actual iterable was <null>");
}

#[test]
fn null_expected() {
    let err = assert_iterable_matches(
        Some(equals::<&str, String>),
        None::<Vec<&str>>,
        Some(set(&["y"])),
    )
    .unwrap_err();

    assert!(err.is_assertion());
    assert_eq!(err.to_string(), "expected iterable was <null>");
}

#[test]
fn matching() {
    assert_iterable_matches(
        Some(equals::<&str, String>),
        Some(vec!["x"]),
        Some(set(&["x"])),
    )
    .unwrap();
}

#[test]
fn not_matching() {
    let err = assert_iterable_matches(
        Some(equals::<&str, String>),
        Some(vec!["x"]),
        Some(set(&["y"])),
    )
    .unwrap_err();

    assert_eq!(err.kind(), Some(MismatchKind::Element { index: 0 }));
    assert_eq!(
        err.to_string(),
        "iterable contents do not match at index 0, expected: <x> but was: <y>"
    );
}

#[test]
fn actual_short() {
    let err = assert_iterable_matches(
        Some(equals::<&str, String>),
        Some(vec!["x"]),
        Some(set(&[])),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "iterable lengths differ, expected: <1> but was: <0>"
    );
}

#[test]
fn expected_short() {
    let err = assert_iterable_matches(
        Some(equals::<&str, String>),
        Some(Vec::<&str>::new()),
        Some(set(&["y"])),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "iterable lengths differ, expected: <0> but was: <1>"
    );
}

#[test]
fn user_supplied_predicate() {
    assert_iterable_matches(
        Some(|e: &i32, a: &i32| a > e),
        Some(vec![1, 2, 3]),
        Some(vec![2, 3, 4]),
    )
    .unwrap();
}

#[test]
fn message_and_supplier_prefix_failures() {
    let err = assert_iterable_matches_with_message(
        Some(equals::<&str, String>),
        Some(vec!["x"]),
        Some(set(&[])),
        "sizes",
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "sizes ==> iterable lengths differ, expected: <1> but was: <0>"
    );

    let row = 4;
    let err = assert_iterable_matches_with_supplier(
        Some(equals::<&str, String>),
        Some(vec!["x"]),
        None::<BTreeSet<String>>,
        || format!("row {row}"),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "row 4 ==> actual iterable was <null>");
}

#[test]
fn lazy_iterators_are_consumed_once() {
    let mut produced = 0;
    let actual = (0..3).inspect(|_| produced += 1);

    let err = assert_iterable_matches(
        Some(equals::<i32, i32>),
        Some(vec![0, 1, 2, 3, 4]),
        Some(actual),
    )
    .unwrap_err();

    assert_eq!(
        err.kind(),
        Some(MismatchKind::Length {
            expected: 5,
            actual: 3
        })
    );
    assert_eq!(produced, 3);
}

#[test]
fn failure_payload_carries_values() {
    let err = assert_iterable_matches(
        Some(|e: &u32, a: &u32| e % 2 == a % 2),
        Some(vec![2, 4, 6]),
        Some(vec![8, 10, 11]),
    )
    .unwrap_err();

    let failure = err.failure().unwrap();
    assert_eq!(failure.expected().unwrap().rendered(), "6");
    assert_eq!(failure.actual().unwrap().rendered(), "11");
    assert_eq!(failure.expected().unwrap().type_name(), "u32");
}
