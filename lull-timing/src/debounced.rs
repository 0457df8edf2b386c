// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::options::{clamp_delay, DebounceOptions};
use crate::timer_task::{arm, TimerDriven, TimerStep};
use core::fmt;
use core::time::Duration;
use lull_core::Result;
use lull_runtime::mutex::MutexLike;
use lull_runtime::runtime::Runtime;
use lull_runtime::task::TaskHandle;
use lull_runtime::DefaultRuntime;
use std::sync::Arc;

/// A callback wrapped so that bursts of calls collapse into one invocation.
///
/// Each [`call`](Debounced::call) restarts a quiet-period timer of length
/// `wait`. What happens at the edges of a burst is decided by
/// [`DebounceOptions`]:
///
/// - **trailing** (default): once `wait` passes with no new call, the callback
///   runs once with the arguments of the most recent call
/// - **leading**: the first call of a burst runs the callback immediately; the
///   timer still starts so the rest of the burst is gated
/// - both: at most two invocations per burst, and a burst consisting of just
///   the leading call runs only once
///
/// Handles are cheap to clone and share the same timer. Dropping the last
/// handle cancels any pending trailing call.
///
/// # Example
///
/// ```rust,no_run
/// use lull_timing::{DebounceOptions, Debounced};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let search = Debounced::new(
///     |query: String| println!("searching for {query}"),
///     Duration::from_millis(250),
///     DebounceOptions::default().with_leading(true),
/// );
///
/// search.call("r".into()); // runs now (leading edge)
/// search.call("ru".into());
/// search.call("rust".into()); // runs 250ms later (trailing edge)
/// # }
/// ```
pub struct Debounced<A, F, R = DefaultRuntime>
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
    options: DebounceOptions,
    state: R::Mutex<DebounceState<A, R>>,
}

struct DebounceState<A, R: Runtime> {
    pending: Option<A>,
    last_call: Option<R::Instant>,
    // First call deferred since the last invocation; anchors `max_wait`.
    burst_start: Option<R::Instant>,
    timer: Option<R::Task>,
    generation: u64,
}

/// Creates a [`Debounced`] wrapper on the default runtime.
///
/// Shorthand for [`Debounced::new`].
pub fn debounce<A, F>(func: F, wait: Duration, options: DebounceOptions) -> Debounced<A, F>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced::new(func, wait, options)
}

impl<A, F> Debounced<A, F, DefaultRuntime>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    /// Wraps `func` on the default runtime.
    pub fn new(func: F, wait: Duration, options: DebounceOptions) -> Self {
        Self::with_runtime(func, wait, options)
    }
}

impl<A, F, R> Debounced<A, F, R>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
    R: Runtime,
{
    /// Wraps `func`, scheduling its timer on runtime `R`.
    ///
    /// `wait` and `max_wait` are clamped to [`MAX_DELAY`](crate::MAX_DELAY).
    pub fn with_runtime(func: F, wait: Duration, options: DebounceOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                func,
                wait: clamp_delay(wait),
                options: options.clamped(),
                state: MutexLike::new(DebounceState {
                    pending: None,
                    last_call: None,
                    burst_start: None,
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
            lull_core::error!("debounced call dropped: {}", err);
        }
    }

    /// Requests an invocation with `args`, reporting a missing runtime.
    ///
    /// On error nothing changes: the arguments are not buffered and no edge
    /// fires.
    pub fn try_call(&self, args: A) -> Result<()> {
        let now = R::now();
        let leading_args = {
            let mut state = self.shared.state.lock();
            if state.timer.is_none() {
                let generation = state.generation.wrapping_add(1);
                let delay = self.shared.next_delay(now, now, None);
                let task = arm::<R, _>(&self.shared, generation, delay)?;
                state.generation = generation;
                state.timer = Some(task);
                state.last_call = Some(now);
                if self.shared.options.leading {
                    state.burst_start = None;
                    Some(args)
                } else {
                    state.pending = Some(args);
                    state.burst_start = Some(now);
                    None
                }
            } else {
                if state.pending.is_none() {
                    state.burst_start = Some(now);
                }
                state.pending = Some(args);
                state.last_call = Some(now);
                None
            }
        };

        if let Some(args) = leading_args {
            lull_core::debug!("debounce leading edge");
            (self.shared.func)(args);
        }
        Ok(())
    }

    /// Drops the pending timer and any buffered trailing call.
    ///
    /// Once this returns no deferred call requested before it will run. A
    /// leading call that already ran is unaffected.
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
            state.last_call = None;
            state.burst_start = None;
            state.timer.take()
        };
        if let Some(task) = task {
            task.abort();
        }
    }

    /// Runs a pending trailing call right away.
    ///
    /// Returns `true` if the callback ran. Without a pending trailing call
    /// this is a no-op and returns `false`.
    pub fn flush(&self) -> bool {
        let (task, args) = {
            let mut state = self.shared.state.lock();
            if !self.shared.options.trailing || state.pending.is_none() || state.timer.is_none()
            {
                return false;
            }
            state.generation = state.generation.wrapping_add(1);
            state.last_call = None;
            state.burst_start = None;
            (state.timer.take(), state.pending.take())
        };
        if let Some(task) = task {
            task.abort();
        }
        match args {
            Some(args) => {
                lull_core::debug!("debounce flushed");
                (self.shared.func)(args);
                true
            }
            None => false,
        }
    }

    /// Whether a timer is armed, i.e. a burst is in progress.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().timer.is_some()
    }

    /// The quiet period this wrapper waits for.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }

    /// The edge configuration this wrapper was built with.
    pub fn options(&self) -> DebounceOptions {
        self.shared.options
    }
}

impl<A, F, R> Shared<A, F, R>
where
    A: Send + 'static,
    R: Runtime,
{
    /// Delay until the next deadline: the end of the quiet period, or the
    /// `max_wait` bound of the current burst if that comes first.
    fn next_delay(
        &self,
        now: R::Instant,
        last_call: R::Instant,
        burst_start: Option<R::Instant>,
    ) -> Duration {
        let quiet_deadline = last_call + self.wait;
        let deadline = match (self.options.effective_max_wait(self.wait), burst_start) {
            (Some(max_wait), Some(start)) => quiet_deadline.min(start + max_wait),
            _ => quiet_deadline,
        };
        if deadline > now {
            deadline - now
        } else {
            Duration::ZERO
        }
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
                lull_core::debug!("stale debounce timer ignored");
                return TimerStep::Done;
            }
            let Some(last_call) = state.last_call else {
                state.timer = None;
                return TimerStep::Done;
            };

            let max_deadline = self
                .options
                .effective_max_wait(self.wait)
                .zip(state.burst_start)
                .map(|(max_wait, start)| start + max_wait);

            if now >= last_call + self.wait {
                state.timer = None;
                state.burst_start = None;
                let args = state.pending.take();
                (TimerStep::Done, args.filter(|_| self.options.trailing))
            } else if max_deadline.is_some_and(|deadline| now >= deadline) {
                state.burst_start = None;
                let args = state.pending.take();
                (
                    TimerStep::Rearm(self.next_delay(now, last_call, None)),
                    args,
                )
            } else {
                let delay = self.next_delay(now, last_call, state.burst_start);
                (TimerStep::Rearm(delay), None)
            }
        };

        if let Some(args) = args {
            lull_core::debug!("debounce timer fired");
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

impl<A, F, R> Clone for Debounced<A, F, R>
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

impl<A, F, R> fmt::Debug for Debounced<A, F, R>
where
    A: Send + 'static,
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.shared.wait)
            .field("options", &self.shared.options)
            .finish_non_exhaustive()
    }
}
