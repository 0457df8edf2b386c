// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-pass array helpers.
//!
//! Generic helpers take slices and return owned vectors in input order. The
//! JSON-specific ones (`compact`, `flatten`, `flatten_deep`) take slices of
//! [`Value`].

use crate::predicates::is_truthy;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Most elements [`range`] produces; longer ranges are truncated.
const MAX_RANGE_LEN: i128 = 1 << 20;

/// Splits `items` into groups of `size`; the last group holds the remainder.
/// A `size` of zero yields no groups.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Drops falsy values (`null`, `false`, `0`, `""`).
pub fn compact(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|item| is_truthy(item)).cloned().collect()
}

/// Flattens one level of nested arrays.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(inner) => out.extend(inner.iter().cloned()),
            other => out.push(other.clone()),
        }
    }
    out
}

/// Flattens nested arrays all the way down.
pub fn flatten_deep(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, &mut out);
    out
}

fn flatten_into(items: &[Value], out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) => flatten_into(inner, out),
            other => out.push(other.clone()),
        }
    }
}

/// First occurrence of each distinct item, in order.
pub fn uniq<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Like [`uniq`], comparing items by the key `by` computes.
pub fn uniq_by<T, K, F>(items: &[T], mut by: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(by(*item)))
        .cloned()
        .collect()
}

/// Items of `items` not present in `exclude`. Duplicates in `items` survive.
pub fn difference<T: Eq + Hash + Clone>(items: &[T], exclude: &[T]) -> Vec<T> {
    let exclude: HashSet<&T> = exclude.iter().collect();
    items
        .iter()
        .filter(|item| !exclude.contains(item))
        .cloned()
        .collect()
}

/// Distinct items of `first` that also appear in `second`, in `first`'s order.
pub fn intersection<T: Eq + Hash + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let second: HashSet<&T> = second.iter().collect();
    let mut seen = HashSet::new();
    first
        .iter()
        .filter(|item| second.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}

/// Groups items by key. Each group keeps input order.
pub fn group_by<T, K, F>(items: &[T], mut key: F) -> BTreeMap<K, Vec<T>>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item.clone());
    }
    groups
}

/// Indexes items by key; a later item replaces an earlier one with the same key.
pub fn key_by<T, K, F>(items: &[T], mut key: F) -> BTreeMap<K, T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    items
        .iter()
        .map(|item| (key(item), item.clone()))
        .collect()
}

/// Numbers from `start` up to, not including, `end`, `step` apart.
///
/// A negative `step` counts down. A `step` of zero repeats `start` once per
/// unit between `start` and `end`. A step pointing away from `end` yields
/// nothing. At most 1 048 576 (2^20) numbers are produced; a longer range is
/// cut off after that many.
///
/// ```
/// use lull_helpers::range;
///
/// assert_eq!(range(0, 10, 3), vec![0, 3, 6, 9]);
/// assert_eq!(range(0, -3, -1), vec![0, -1, -2]);
/// assert_eq!(range(1, 4, 0), vec![1, 1, 1]);
/// ```
pub fn range(start: i64, end: i64, step: i64) -> Vec<i64> {
    let span = i128::from(end) - i128::from(start);
    let divisor = if step == 0 {
        span.signum()
    } else {
        i128::from(step)
    };
    if span == 0 || divisor == 0 || span.signum() != divisor.signum() {
        return Vec::new();
    }

    let len = ((span.abs() + divisor.abs() - 1) / divisor.abs()).min(MAX_RANGE_LEN);
    (0..len)
        .filter_map(|i| i64::try_from(i128::from(start) + i * i128::from(step)).ok())
        .collect()
}
