// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Path-based access into nested [`Value`]s.
//!
//! Paths are anything convertible into an [`ObjectPath`]: `"a.b[0]"`,
//! `["a", "b"]`, `vec![PathSegment::Index(0)]`, or an `&ObjectPath`.
//! When a string path spells an existing top-level key exactly, that key
//! wins over the parsed segments.

use crate::path::{ObjectPath, PathSegment};
use serde_json::{Map, Value};

/// Longest run of `null` padding [`set`] inserts to reach an array index.
const MAX_INDEX_GAP: usize = 1 << 16;

/// The value at `path`, or `None` ("undefined") if any segment is absent.
///
/// An empty path resolves to `value` itself.
///
/// ```
/// use lull_helpers::get;
/// use serde_json::json;
///
/// let value = json!({ "a": { "b": 1 } });
/// assert_eq!(get(&value, "a.b"), Some(&json!(1)));
/// assert_eq!(get(&json!({}), ["a", "b"]), None);
/// ```
pub fn get(value: &Value, path: impl Into<ObjectPath>) -> Option<&Value> {
    let path = path.into();
    if let Some(key) = literal_key(value, &path) {
        return value.get(key);
    }
    path.segments().iter().try_fold(value, step)
}

/// The value at `path`, or `default` when it is absent.
///
/// Only absence falls back; an explicit `null` is returned as is.
pub fn get_or(value: &Value, path: impl Into<ObjectPath>, default: impl Into<Value>) -> Value {
    get(value, path)
        .cloned()
        .unwrap_or_else(|| default.into())
}

/// Whether `path` resolves to a value.
pub fn has(value: &Value, path: impl Into<ObjectPath>) -> bool {
    get(value, path).is_some()
}

/// Writes `new_value` at `path`, creating missing objects and arrays along
/// the way. A missing container becomes an array when the next segment is an
/// index, otherwise an object; scalars in the way are replaced.
///
/// Returns `false` and leaves `value` untouched when the root is not an
/// object or array, the path is empty, a key segment meets an array, or an
/// index lies more than 65536 slots past the end of its array.
pub fn set(value: &mut Value, path: impl Into<ObjectPath>, new_value: impl Into<Value>) -> bool {
    let path = path.into();
    if let Some(key) = literal_key(value, &path).map(str::to_owned) {
        if let Value::Object(map) = value {
            map.insert(key, new_value.into());
            return true;
        }
    }
    set_segments(value, path.segments(), new_value.into())
}

fn set_segments(root: &mut Value, segments: &[PathSegment], new_value: Value) -> bool {
    if !is_container(root) || segments.is_empty() || !reachable(root, segments) {
        lull_core::debug!("set skipped: path cannot be written");
        return false;
    }

    let mut current = root;
    for (position, segment) in segments.iter().enumerate() {
        let Some(slot) = child_slot(current, segment) else {
            return false;
        };
        current = slot;
        if let Some(next) = segments.get(position + 1) {
            if !is_container(current) {
                *current = empty_container_for(next);
            }
        }
    }
    *current = new_value;
    true
}

/// Removes the value at `path`. Object keys are deleted; array elements are
/// replaced by `null` so later indices keep their meaning.
///
/// Returns whether anything was removed.
pub fn unset(value: &mut Value, path: impl Into<ObjectPath>) -> bool {
    let path = path.into();
    if let Some(key) = literal_key(value, &path).map(str::to_owned) {
        if let Value::Object(map) = value {
            return map.remove(&key).is_some();
        }
    }

    let Some((last, parents)) = path.segments().split_last() else {
        return false;
    };
    let mut current = value;
    for segment in parents {
        let next = match current {
            Value::Object(map) => map.get_mut(segment.as_key().as_ref()),
            Value::Array(items) => segment.as_index().and_then(|index| items.get_mut(index)),
            _ => None,
        };
        let Some(next) = next else {
            return false;
        };
        current = next;
    }

    match current {
        Value::Object(map) => map.remove(last.as_key().as_ref()).is_some(),
        Value::Array(items) => match last.as_index().and_then(|index| items.get_mut(index)) {
            Some(slot) => {
                *slot = Value::Null;
                true
            }
            None => false,
        },
        _ => false,
    }
}

/// A new object holding only the values found at `paths`, nested the same
/// way. Absent paths are skipped.
///
/// ```
/// use lull_helpers::pick;
/// use serde_json::json;
///
/// let user = json!({ "name": "Ada", "address": { "city": "London", "zip": "N1" } });
/// assert_eq!(
///     pick(&user, ["name", "address.city"]),
///     json!({ "name": "Ada", "address": { "city": "London" } })
/// );
/// ```
pub fn pick<I, P>(value: &Value, paths: I) -> Value
where
    I: IntoIterator<Item = P>,
    P: Into<ObjectPath>,
{
    let mut picked = Value::Object(Map::new());
    for path in paths {
        let path = path.into();
        if let Some(key) = literal_key(value, &path) {
            if let (Some(found), Value::Object(map)) = (value.get(key), &mut picked) {
                map.insert(key.to_owned(), found.clone());
            }
            continue;
        }
        if let Some(found) = get(value, &path) {
            set_segments(&mut picked, path.segments(), found.clone());
        }
    }
    picked
}

/// A copy of `value` without the values at `paths`.
pub fn omit<I, P>(value: &Value, paths: I) -> Value
where
    I: IntoIterator<Item = P>,
    P: Into<ObjectPath>,
{
    let mut kept = value.clone();
    for path in paths {
        unset(&mut kept, path);
    }
    kept
}

fn literal_key<'p>(value: &Value, path: &'p ObjectPath) -> Option<&'p str> {
    let literal = path.literal()?;
    value
        .as_object()?
        .contains_key(literal)
        .then_some(literal)
}

fn step<'v>(value: &'v Value, segment: &PathSegment) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment.as_key().as_ref()),
        Value::Array(items) => items.get(segment.as_index()?),
        _ => None,
    }
}

fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

fn empty_container_for(next: &PathSegment) -> Value {
    if next.as_index().is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Dry run of [`set_segments`], so a refused write changes nothing.
fn reachable(root: &Value, segments: &[PathSegment]) -> bool {
    let mut current = Some(root);
    for segment in segments {
        current = match current {
            Some(Value::Array(items)) => {
                let Some(index) = segment
                    .as_index()
                    .filter(|index| *index <= items.len() + MAX_INDEX_GAP)
                else {
                    return false;
                };
                items.get(index)
            }
            Some(Value::Object(map)) => map.get(segment.as_key().as_ref()),
            // Missing or scalar: a fresh container shaped by this segment.
            _ => {
                if segment.as_index().is_some_and(|index| index > MAX_INDEX_GAP) {
                    return false;
                }
                None
            }
        };
    }
    true
}

fn child_slot<'v>(container: &'v mut Value, segment: &PathSegment) -> Option<&'v mut Value> {
    match container {
        Value::Object(map) => Some(
            map.entry(segment.as_key().into_owned())
                .or_insert(Value::Null),
        ),
        Value::Array(items) => {
            let index = segment.as_index()?;
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            items.get_mut(index)
        }
        _ => None,
    }
}
