// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::{future::Future, time::Duration};

#[cfg(feature = "runtime-tokio")]
use lull_core::{LullError, Result};

#[cfg(feature = "runtime-tokio")]
use crate::{runtime::Runtime, task::TaskHandle, timer::Timer};

#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioRuntime;

#[cfg(feature = "runtime-tokio")]
impl Runtime for TokioRuntime {
    type Mutex<T: Send> = parking_lot::Mutex<T>;
    type Timer = TokioTimer;
    type Instant = tokio::time::Instant;
    type Task = TokioTask;

    fn spawn<F>(future: F) -> Result<Self::Task>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|err| LullError::no_runtime(err.to_string()))?;
        Ok(TokioTask(handle.spawn(future)))
    }
}

/// Tokio clock and sleep.
///
/// Uses `tokio::time::Instant` rather than `std::time::Instant` so that a
/// paused test clock (`tokio::time::pause`) drives both sleeping and the
/// elapsed-time arithmetic of the wrappers.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioTask(tokio::task::JoinHandle<()>);

#[cfg(feature = "runtime-tokio")]
impl TaskHandle for TokioTask {
    fn abort(self) {
        self.0.abort();
    }

    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}
