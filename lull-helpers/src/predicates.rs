// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Type predicates over [`Value`].

use serde_json::Value;

/// `null`. Rust's "undefined" is an absent value, i.e. `None` from a lookup.
pub fn is_nil(value: &Value) -> bool {
    value.is_null()
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// Any JSON number, integral or not.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// A number with no fractional part. `3.0` counts.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) => {
            number.is_i64()
                || number.is_u64()
                || number.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// A JSON object (`{...}`). Arrays are not plain objects.
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

/// Truthiness: `null`, `false`, `0` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|f| f != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
