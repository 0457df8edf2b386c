// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lull_helpers::{get, is_empty, IsEmpty};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

#[test]
fn test_is_empty_json_containers() {
    assert!(is_empty(&json!([])));
    assert!(is_empty(&json!({})));
    assert!(is_empty(&json!("")));
    assert!(is_empty(&json!(null)));

    assert!(!is_empty(&json!([null])));
    assert!(!is_empty(&json!({"a": null})));
    assert!(!is_empty(&json!(" ")));
}

#[test]
fn test_is_empty_scalars_have_no_contents() {
    assert!(is_empty(&json!(true)));
    assert!(is_empty(&json!(false)));
    assert!(is_empty(&json!(0)));
    assert!(is_empty(&json!(42.5)));
}

#[test]
fn test_undefined_lookup_is_empty() {
    let value = json!({});

    assert!(get(&value, "missing").is_empty_value());
    assert!(!get(&json!({"a": [1]}), "a").is_empty_value());
}

#[test]
fn test_is_empty_native_containers() {
    assert!("".is_empty_value());
    assert!(!"x".is_empty_value());
    assert!(String::new().is_empty_value());
    assert!(Vec::<u8>::new().is_empty_value());
    assert!(!vec![1].is_empty_value());
    assert!([0u8; 0][..].is_empty_value());
    assert!(VecDeque::<u8>::new().is_empty_value());
}

#[test]
fn test_is_empty_maps_and_sets_judged_by_contents() {
    let mut map = HashMap::new();
    assert!(map.is_empty_value());
    map.insert("key", 1);
    assert!(!map.is_empty_value());

    let set: HashSet<u8> = [1].into_iter().collect();
    assert!(!set.is_empty_value());

    let tree: BTreeMap<u8, u8> = BTreeMap::new();
    assert!(tree.is_empty_value());

    let tree_set: BTreeSet<u8> = [1, 2].into_iter().collect();
    assert!(!tree_set.is_empty_value());
}

#[test]
fn test_is_empty_option() {
    assert!(None::<String>.is_empty_value());
    assert!(Some(String::new()).is_empty_value());
    assert!(!Some(vec![1]).is_empty_value());
}
