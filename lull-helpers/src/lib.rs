// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Stateless helpers over in-memory values.
//!
//! Every function here is total: absent data yields `None`, `false` or a
//! caller-supplied default, never an error or a panic.
//!
//! - [`predicates`] - type checks and truthiness for [`serde_json::Value`]
//! - [`empty`] - [`is_empty`] for JSON values and the [`IsEmpty`] trait for
//!   native containers
//! - [`array`] - `chunk`, `compact`, `flatten`, `uniq`, `group_by` and friends
//! - [`path`] / [`object`] - [`ObjectPath`] parsing and `get`/`set`/`unset`
//!   style access into nested objects and arrays
//!
//! # Example
//!
//! ```
//! use lull_helpers::{get, get_or, is_empty};
//! use serde_json::json;
//!
//! let config = json!({ "server": { "ports": [8080, 8443] } });
//!
//! assert_eq!(get(&config, "server.ports[1]"), Some(&json!(8443)));
//! assert_eq!(get_or(&config, "server.host", "localhost"), json!("localhost"));
//! assert!(is_empty(&json!({})));
//! ```

pub mod array;
pub mod empty;
pub mod object;
pub mod path;
pub mod predicates;
pub mod prelude;

pub use array::{
    chunk, compact, difference, flatten, flatten_deep, group_by, intersection, key_by, range,
    uniq, uniq_by,
};
pub use empty::{is_empty, IsEmpty};
pub use object::{get, get_or, has, omit, pick, set, unset};
pub use path::{ObjectPath, PathSegment};
pub use predicates::{
    is_array, is_boolean, is_integer, is_nil, is_number, is_plain_object, is_string, is_truthy,
};
