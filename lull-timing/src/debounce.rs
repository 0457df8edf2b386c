// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::options::{clamp_delay, DebounceOptions};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::Stream;
use lull_runtime::runtime::Runtime;
use lull_runtime::timer::Timer;
use lull_runtime::DefaultRuntime;
use pin_project::pin_project;

/// Extension trait providing the `debounce` operator for streams.
///
/// The stream counterpart of [`Debounced`](crate::Debounced): instead of
/// invoking a callback, the adapter emits the item.
pub trait DebounceExt: Stream + Sized {
    /// Debounces the stream by `wait` with the given edge options.
    ///
    /// - When an item arrives, start/restart the quiet-period timer
    /// - With `leading`, the first item of a burst is emitted immediately
    /// - With `trailing`, the latest item is emitted once `wait` passes with
    ///   no new item
    /// - With `max_wait`, a buffered item is emitted no later than `max_wait`
    ///   after it started waiting, even if items keep arriving
    /// - When the source ends, a buffered trailing item is emitted immediately
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lull_timing::{DebounceExt, DebounceOptions};
    /// use futures::{stream, StreamExt};
    /// use std::time::Duration;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let keystrokes = stream::iter(["r", "ru", "rus", "rust"]);
    /// let settled: Vec<_> = keystrokes
    ///     .debounce_with(Duration::from_millis(100), DebounceOptions::default())
    ///     .collect()
    ///     .await;
    /// assert_eq!(settled, vec!["rust"]);
    /// # }
    /// ```
    fn debounce_with(
        self,
        wait: Duration,
        options: DebounceOptions,
    ) -> impl Stream<Item = Self::Item>;

    /// Trailing-only debounce.
    fn debounce(self, wait: Duration) -> impl Stream<Item = Self::Item> {
        self.debounce_with(wait, DebounceOptions::default())
    }
}

impl<S: Stream> DebounceExt for S {
    fn debounce_with(
        self,
        wait: Duration,
        options: DebounceOptions,
    ) -> impl Stream<Item = Self::Item> {
        Box::pin(DebounceStream::<S, DefaultRuntime> {
            stream: self,
            wait: clamp_delay(wait),
            options: options.clamped(),
            pending: None,
            last_item_at: None,
            burst_start: None,
            sleep: None,
            stream_ended: false,
        })
    }
}

#[pin_project]
struct DebounceStream<S: Stream, R: Runtime> {
    #[pin]
    stream: S,
    wait: Duration,
    options: DebounceOptions,
    pending: Option<S::Item>,
    last_item_at: Option<R::Instant>,
    burst_start: Option<R::Instant>,
    #[pin]
    sleep: Option<<R::Timer as Timer>::Sleep>,
    stream_ended: bool,
}

impl<S, R> Stream for DebounceStream<S, R>
where
    S: Stream,
    R: Runtime,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        let timer = R::Timer::default();

        loop {
            // If stream ended, emit a buffered trailing item immediately
            if *this.stream_ended {
                if this.options.trailing {
                    if let Some(item) = this.pending.take() {
                        return Poll::Ready(Some(item));
                    }
                }
                return Poll::Ready(None);
            }

            // Check whether the burst timer elapsed
            if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                if sleep.poll(cx).is_ready() {
                    let now = timer.now();
                    let quiet_deadline = this.last_item_at.map(|at| at + *this.wait);

                    match quiet_deadline {
                        Some(deadline) if now < deadline => {
                            // max_wait reached while items keep arriving
                            *this.burst_start = None;
                            this.sleep.set(Some(timer.sleep_future(deadline - now)));
                            if let Some(item) = this.pending.take() {
                                return Poll::Ready(Some(item));
                            }
                            continue;
                        }
                        _ => {
                            // Quiet period over: the burst ends here
                            this.sleep.set(None);
                            *this.burst_start = None;
                            let item = this.pending.take();
                            if this.options.trailing {
                                if let Some(item) = item {
                                    return Poll::Ready(Some(item));
                                }
                            }
                        }
                    }
                }
            }

            // Poll the source stream for the next item
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    let now = timer.now();
                    *this.last_item_at = Some(now);

                    if this.sleep.is_none() {
                        // First item of a burst
                        this.sleep.set(Some(timer.sleep_future(*this.wait)));
                        if this.options.leading {
                            *this.burst_start = None;
                            return Poll::Ready(Some(item));
                        }
                        *this.burst_start = Some(now);
                        *this.pending = Some(item);
                    } else {
                        if this.pending.is_none() {
                            *this.burst_start = Some(now);
                        }
                        *this.pending = Some(item);

                        let quiet_deadline = now + *this.wait;
                        let deadline = match (
                            this.options.effective_max_wait(*this.wait),
                            *this.burst_start,
                        ) {
                            (Some(max_wait), Some(start)) => quiet_deadline.min(start + max_wait),
                            _ => quiet_deadline,
                        };
                        let delay = if deadline > now {
                            deadline - now
                        } else {
                            Duration::ZERO
                        };
                        this.sleep.set(Some(timer.sleep_future(delay)));
                    }

                    // Continue polling to register the new timer
                    continue;
                }
                Poll::Ready(None) => {
                    *this.stream_ended = true;
                    continue;
                }
                Poll::Pending => {
                    // If we have a pending item, we're waiting for its timer.
                    // Otherwise, we're waiting for the next source item.
                    return Poll::Pending;
                }
            }
        }
    }
}
