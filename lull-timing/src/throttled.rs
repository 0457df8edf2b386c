// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::options::{clamp_delay, ThrottleOptions};
use crate::timer_task::{arm, TimerDriven, TimerStep};
use core::fmt;
use core::time::Duration;
use lull_core::Result;
use lull_runtime::mutex::MutexLike;
use lull_runtime::runtime::Runtime;
use lull_runtime::task::TaskHandle;
use lull_runtime::DefaultRuntime;
use std::sync::Arc;

/// A callback wrapped so that it runs at most once per `wait` window.
///
/// - The first call of a fresh window runs the callback immediately
///   (**leading**, default on).
/// - Further calls in the window are suppressed; the last one's arguments
///   run when the window closes (**trailing**, default on).
/// - A trailing invocation opens the next window at its own firing time, so
///   consecutive invocations are always at least `wait` apart. A window that
///   closes without a trailing invocation leaves the wrapper idle.
///
/// Over any span `T` the callback therefore runs at most `ceil(T / wait) + 1`
/// times, unless [`flush`](Throttled::flush) or [`cancel`](Throttled::cancel)
/// intervene.
///
/// # Example
///
/// ```rust,no_run
/// use lull_timing::{ThrottleOptions, Throttled};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let report = Throttled::new(
///     |position: (i32, i32)| println!("at {position:?}"),
///     Duration::from_millis(100),
///     ThrottleOptions::default(),
/// );
///
/// report.call((0, 0)); // runs now
/// report.call((1, 0)); // suppressed
/// report.call((2, 0)); // runs when the 100ms window closes
/// # }
/// ```
pub struct Throttled<A, F, R = DefaultRuntime>
where
    A: Send + 'static,
    R: Runtime,
{
    shared: Arc<Shared<A, F, R>>,
}

struct Shared<A, F, R>
where
    A: Send + 'static,
    R: Runtime,
{
    func: F,
    wait: Duration,
    options: ThrottleOptions,
    state: R::Mutex<ThrottleState<A, R>>,
}

struct ThrottleState<A, R: Runtime> {
    pending: Option<A>,
    window_end: Option<R::Instant>,
    timer: Option<R::Task>,
    generation: u64,
}

/// Creates a [`Throttled`] wrapper on the default runtime.
///
/// Shorthand for [`Throttled::new`].
pub fn throttle<A, F>(func: F, wait: Duration, options: ThrottleOptions) -> Throttled<A, F>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Throttled::new(func, wait, options)
}

impl<A, F> Throttled<A, F, DefaultRuntime>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    /// Wraps `func` on the default runtime.
    pub fn new(func: F, wait: Duration, options: ThrottleOptions) -> Self {
        Self::with_runtime(func, wait, options)
    }
}

impl<A, F, R> Throttled<A, F, R>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    R: Runtime,
{
    /// Wraps `func`, scheduling its timer on runtime `R`.
    ///
    /// `wait` is clamped to [`MAX_DELAY`](crate::MAX_DELAY).
    pub fn with_runtime(func: F, wait: Duration, options: ThrottleOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                func,
                wait: clamp_delay(wait),
                options,
                state: MutexLike::new(ThrottleState {
                    pending: None,
                    window_end: None,
                    timer: None,
                    generation: 0,
                }),
            }),
        }
    }

    /// Requests an invocation with `args`.
    ///
    /// Never fails. If no runtime is available to arm the timer the call is
    /// dropped and the failure logged; use [`try_call`](Self::try_call) to
    /// observe it.
    pub fn call(&self, args: A) {
        if let Err(err) = self.try_call(args) {
            lull_core::error!("throttled call dropped: {}", err);
        }
    }

    /// Requests an invocation with `args`, reporting a missing runtime.
    pub fn try_call(&self, args: A) -> Result<()> {
        let now = R::now();
        let leading_args = {
            let mut state = self.shared.state.lock();
            let window_open = state.window_end.is_some_and(|end| now < end);
            // A window that has ended but whose timer has not run yet still
            // owes its trailing call; fold this call into it.
            let trailing_overdue = state.timer.is_some()
                && state.pending.is_some()
                && self.shared.options.trailing;

            if window_open || trailing_overdue {
                state.pending = Some(args);
                None
            } else {
                let generation = state.generation.wrapping_add(1);
                let task = arm::<R, _>(&self.shared, generation, self.shared.wait)?;
                if let Some(stale) = state.timer.replace(task) {
                    stale.abort();
                }
                state.generation = generation;
                state.window_end = Some(now + self.shared.wait);
                if self.shared.options.leading {
                    state.pending = None;
                    Some(args)
                } else {
                    state.pending = Some(args);
                    None
                }
            }
        };

        if let Some(args) = leading_args {
            lull_core::debug!("throttle leading edge");
            (self.shared.func)(args);
        }
        Ok(())
    }

    /// Clears any pending trailing call and resets the window.
    ///
    /// The next call after this starts a fresh window.
    ///
    /// On a multi-thread runtime a trailing callback that the timer already
    /// started on another worker runs to completion; `cancel` does not wait
    /// for it. The state lock is released before any callback runs, so a
    /// callback may call back into the wrapper.
    pub fn cancel(&self) {
        let task = {
            let mut state = self.shared.state.lock();
            state.generation = state.generation.wrapping_add(1);
            state.pending = None;
            state.window_end = None;
            state.timer.take()
        };
        if let Some(task) = task {
            task.abort();
        }
    }

    /// Runs a pending trailing call right away and resets the window.
    ///
    /// Returns `true` if the callback ran; `false` (and no change) when no
    /// trailing call was pending.
    pub fn flush(&self) -> bool {
        let (task, args) = {
            let mut state = self.shared.state.lock();
            if !self.shared.options.trailing || state.pending.is_none() || state.timer.is_none()
            {
                return false;
            }
            state.generation = state.generation.wrapping_add(1);
            state.window_end = None;
            (state.timer.take(), state.pending.take())
        };
        if let Some(task) = task {
            task.abort();
        }
        match args {
            Some(args) => {
                lull_core::debug!("throttle flushed");
                (self.shared.func)(args);
                true
            }
            None => false,
        }
    }

    /// Whether a window is currently open.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().timer.is_some()
    }

    /// The window length.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }

    /// The edge configuration this wrapper was built with.
    pub fn options(&self) -> ThrottleOptions {
        self.shared.options
    }
}

impl<A, F, R> TimerDriven for Shared<A, F, R>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    R: Runtime,
{
    fn on_timer(&self, generation: u64) -> TimerStep {
        let now = R::now();
        let (step, args) = {
            let mut state = self.state.lock();
            if state.generation != generation || state.timer.is_none() {
                lull_core::debug!("stale throttle timer ignored");
                return TimerStep::Done;
            }
            let Some(end) = state.window_end else {
                state.timer = None;
                return TimerStep::Done;
            };
            if now < end {
                return TimerStep::Rearm(end - now);
            }

            match state.pending.take() {
                Some(args) if self.options.trailing => {
                    state.window_end = Some(now + self.wait);
                    (TimerStep::Rearm(self.wait), Some(args))
                }
                _ => {
                    state.window_end = None;
                    state.timer = None;
                    (TimerStep::Done, None)
                }
            }
        };

        if let Some(args) = args {
            lull_core::debug!("throttle trailing edge");
            (self.func)(args);
        }
        step
    }
}

impl<A, F, R> Drop for Shared<A, F, R>
where
    A: Send + 'static,
    R: Runtime,
{
    fn drop(&mut self) {
        let task = self.state.lock().timer.take();
        if let Some(task) = task {
            task.abort();
        }
    }
}

impl<A, F, R> Clone for Throttled<A, F, R>
where
    A: Send + 'static,
    R: Runtime,
{
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A, F, R> fmt::Debug for Throttled<A, F, R>
where
    A: Send + 'static,
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("wait", &self.shared.wait)
            .field("options", &self.shared.options)
            .finish_non_exhaustive()
    }
}
