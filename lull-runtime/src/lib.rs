// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction used by the rate-limited invokers.
//!
//! A [`Runtime`](runtime::Runtime) bundles the three things a timer-driven
//! wrapper needs from its environment: a monotonic clock with sleep futures
//! ([`Timer`](timer::Timer)), a lock for the wrapper's state
//! ([`MutexLike`](mutex::MutexLike)) and a way to spawn the timer task
//! ([`TaskHandle`](task::TaskHandle)).
//!
//! Enable `runtime-tokio` (default) for [`TokioRuntime`](impls::tokio::TokioRuntime).

pub mod impls;
pub mod mutex;
pub mod runtime;
pub mod task;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = impls::tokio::TokioRuntime;
