// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Lull
//!
//! Rate-limited invokers and a handful of stateless value helpers.
//!
//! ## Overview
//!
//! - [`Debounced`] waits until calls have been quiet for `wait`, then runs
//!   the callback once with the latest arguments
//! - [`Throttled`] runs the callback at most once per `wait` window
//! - [`DebounceExt`] and [`ThrottleExt`] apply the same policies to streams
//! - [`helpers`] covers type predicates, [`is_empty`], array helpers and
//!   path access such as [`get`] and [`set`]
//!
//! Timers run on the Tokio runtime (`runtime-tokio`, on by default).
//! Logging goes through `tracing` when the `tracing` feature is enabled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lull::prelude::*;
//! use serde_json::json;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = json!({ "autosave": { "delay_ms": 500 } });
//!     let delay = get(&settings, "autosave.delay_ms")
//!         .and_then(|value| value.as_u64())
//!         .unwrap_or(1000);
//!
//!     let save = Debounced::new(
//!         |text: String| println!("saving {text}"),
//!         Duration::from_millis(delay),
//!         DebounceOptions::default(),
//!     );
//!
//!     save.call("draft 1".to_string());
//!     save.call("draft 2".to_string());
//!     // 500ms later: "saving draft 2"
//! }
//! ```

pub use lull_core::{LullError, Result};

pub use lull_timing::{
    debounce, throttle, DebounceExt, DebounceOptions, Debounced, DefaultRuntime, ThrottleExt,
    ThrottleOptions, Throttled, MAX_DELAY,
};

pub use lull_helpers::{
    get, get_or, has, is_empty, omit, pick, set, unset, IsEmpty, ObjectPath, PathSegment,
};

/// Stateless helpers, re-exported from `lull-helpers`.
pub mod helpers {
    pub use lull_helpers::array::*;
    pub use lull_helpers::empty::*;
    pub use lull_helpers::object::*;
    pub use lull_helpers::path::*;
    pub use lull_helpers::predicates::*;
}

/// The JSON value type the helpers operate on.
pub use serde_json::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use lull_helpers::prelude::*;
    pub use lull_timing::prelude::*;
}
