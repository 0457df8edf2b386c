// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Rate-limited invokers: debounce and throttle.
//!
//! Two wrappers turn a plain callback into a rate-limited one:
//!
//! - **[`Debounced`]** delays invocation until calls have been quiet for `wait`
//! - **[`Throttled`]** invokes at most once per `wait` window
//!
//! Both accept `leading`/`trailing` edge options and expose `cancel()` and
//! `flush()`. Their timers run as tasks on the active runtime (Tokio by
//! default); the callback never runs while internal state is locked, so it may
//! call back into its own wrapper.
//!
//! The same policies are available for streams through [`DebounceExt`] and
//! [`ThrottleExt`].
//!
//! # Example
//!
//! ```rust,no_run
//! use lull_timing::{DebounceOptions, Debounced};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let save = Debounced::new(
//!     |text: String| println!("saving {text}"),
//!     Duration::from_millis(300),
//!     DebounceOptions::default(),
//! );
//!
//! save.call("h".to_string());
//! save.call("he".to_string());
//! save.call("hello".to_string());
//! // 300ms after the last call: "saving hello", exactly once
//! # }
//! ```

#[cfg(not(feature = "runtime-tokio"))]
compile_error!("lull-timing needs a runtime feature, e.g. `runtime-tokio`");

mod debounce;
mod debounced;
mod options;
pub mod prelude;
mod throttle;
mod throttled;
mod timer_task;

pub use debounce::DebounceExt;
pub use debounced::{debounce, Debounced};
pub use options::{DebounceOptions, ThrottleOptions, MAX_DELAY};
pub use throttle::ThrottleExt;
pub use throttled::{throttle, Throttled};

pub use lull_runtime::DefaultRuntime;
