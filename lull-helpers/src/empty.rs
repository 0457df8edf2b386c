// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Emptiness checks.
//!
//! [`is_empty`] answers for JSON values. Native containers implement
//! [`IsEmpty`] and are judged by their contents, so a map or set holding
//! entries is never reported empty.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Whether `value` has no contents.
///
/// `null`, `""`, `[]` and `{}` are empty. Booleans and numbers are empty as
/// well: they are scalars with nothing inside.
///
/// ```
/// use lull_helpers::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!(null)));
/// assert!(is_empty(&json!(42)));
/// assert!(!is_empty(&json!([0])));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Emptiness for native Rust values.
///
/// `None` plays the role of "undefined" and is always empty; `Some(x)` is
/// empty when `x` is.
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for Value {
    fn is_empty_value(&self) -> bool {
        is_empty(self)
    }
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(inner) => inner.is_empty_value(),
            None => true,
        }
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}
