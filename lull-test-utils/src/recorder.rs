// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Records invocations of a callback.
///
/// Timestamps are relative to the recorder's creation and read from the Tokio
/// clock, so under `start_paused = true` they are exact.
#[derive(Debug, Clone)]
pub struct CallRecorder<A> {
    start: Instant,
    calls: Arc<Mutex<Vec<(Duration, A)>>>,
}

impl<A> CallRecorder<A>
where
    A: Clone + Send + 'static,
{
    /// Creates an empty recorder; elapsed times are measured from now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that appends its argument to this recorder.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static {
        let start = self.start;
        let calls = self.calls.clone();
        move |args| calls.lock().push((start.elapsed(), args))
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Recorded arguments, in invocation order.
    pub fn values(&self) -> Vec<A> {
        self.calls.lock().iter().map(|(_, args)| args.clone()).collect()
    }

    /// Recorded invocation times in whole milliseconds since creation.
    pub fn times_ms(&self) -> Vec<u128> {
        self.calls
            .lock()
            .iter()
            .map(|(at, _)| at.as_millis())
            .collect()
    }

    /// Recorded `(millis, args)` pairs.
    pub fn calls(&self) -> Vec<(u128, A)> {
        self.calls
            .lock()
            .iter()
            .map(|(at, args)| (at.as_millis(), args.clone()))
            .collect()
    }

    /// Most recent arguments, if any.
    pub fn last(&self) -> Option<A> {
        self.calls.lock().last().map(|(_, args)| args.clone())
    }
}

impl<A> Default for CallRecorder<A>
where
    A: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
