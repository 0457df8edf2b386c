// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use lull_core::Result;
use lull_runtime::runtime::Runtime;
use lull_runtime::timer::Timer;
use std::sync::{Arc, Weak};

/// What a timer task does after handling an expiry.
pub(crate) enum TimerStep {
    /// Sleep again for the given duration.
    Rearm(Duration),
    /// Exit; the wrapper is idle.
    Done,
}

/// State machine driven by a background timer task.
pub(crate) trait TimerDriven: Send + Sync + 'static {
    /// Called each time the task's sleep elapses. `generation` is the value
    /// the task was armed with; a mismatch means it was cancelled or replaced.
    fn on_timer(&self, generation: u64) -> TimerStep;
}

/// Spawns the timer task for `target`.
///
/// The task holds only a weak reference between sleeps, so dropping the last
/// wrapper handle lets the task exit at its next wake-up.
pub(crate) fn arm<R, T>(target: &Arc<T>, generation: u64, delay: Duration) -> Result<R::Task>
where
    R: Runtime,
    T: TimerDriven,
{
    let weak: Weak<T> = Arc::downgrade(target);
    R::spawn(async move {
        let timer = R::Timer::default();
        let mut delay = delay;
        loop {
            timer.sleep_future(delay).await;
            let Some(target) = weak.upgrade() else {
                lull_core::debug!("timer woke after its wrapper was dropped");
                return;
            };
            match target.on_timer(generation) {
                TimerStep::Rearm(next) => delay = next,
                TimerStep::Done => return,
            }
        }
    })
}
