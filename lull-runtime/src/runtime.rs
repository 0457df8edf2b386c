// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{mutex::MutexLike, task::TaskHandle, timer::Timer};
use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;
use lull_core::Result;

pub trait Runtime: 'static {
    type Mutex<T: Send>: MutexLike<T> + Send + Sync;
    type Timer: Timer<Instant = Self::Instant> + Default;
    type Instant: Copy
        + Ord
        + Send
        + Sync
        + Debug
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;
    type Task: TaskHandle;

    /// Spawns `future` as a detached background task.
    ///
    /// Fails with [`LullError::NoRuntime`](lull_core::LullError::NoRuntime)
    /// when called outside of a running runtime.
    fn spawn<F>(future: F) -> Result<Self::Task>
    where
        F: Future<Output = ()> + Send + 'static;

    /// Current instant on this runtime's clock.
    fn now() -> Self::Instant {
        Self::Timer::default().now()
    }
}
