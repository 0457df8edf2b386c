// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::options::{clamp_delay, ThrottleOptions};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::Stream;
use lull_runtime::runtime::Runtime;
use lull_runtime::timer::Timer;
use lull_runtime::DefaultRuntime;
use pin_project::pin_project;

/// Extension trait providing the `throttle` operator for streams.
///
/// The stream counterpart of [`Throttled`](crate::Throttled).
pub trait ThrottleExt: Stream + Sized {
    /// Throttles the stream to at most one item per `wait` window.
    ///
    /// - When an item arrives and no window is open, a window starts; with
    ///   `leading` the item is emitted immediately
    /// - Items inside the window are suppressed; with `trailing` the last of
    ///   them is emitted when the window closes, opening the next window
    /// - When the source ends, a buffered trailing item is emitted immediately
    fn throttle_with(
        self,
        wait: Duration,
        options: ThrottleOptions,
    ) -> impl Stream<Item = Self::Item>;

    /// Throttle with both edges enabled.
    fn throttle(self, wait: Duration) -> impl Stream<Item = Self::Item> {
        self.throttle_with(wait, ThrottleOptions::default())
    }
}

impl<S: Stream> ThrottleExt for S {
    fn throttle_with(
        self,
        wait: Duration,
        options: ThrottleOptions,
    ) -> impl Stream<Item = Self::Item> {
        Box::pin(ThrottleStream::<S, DefaultRuntime> {
            stream: self,
            wait: clamp_delay(wait),
            options,
            pending: None,
            sleep: None,
            stream_ended: false,
        })
    }
}

#[pin_project]
struct ThrottleStream<S: Stream, R: Runtime> {
    #[pin]
    stream: S,
    wait: Duration,
    options: ThrottleOptions,
    pending: Option<S::Item>,
    #[pin]
    sleep: Option<<R::Timer as Timer>::Sleep>,
    stream_ended: bool,
}

impl<S, R> Stream for ThrottleStream<S, R>
where
    S: Stream,
    R: Runtime,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        let timer = R::Timer::default();

        loop {
            if *this.stream_ended {
                if this.options.trailing {
                    if let Some(item) = this.pending.take() {
                        return Poll::Ready(Some(item));
                    }
                }
                return Poll::Ready(None);
            }

            // 1. Check the window timer
            if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                if sleep.poll(cx).is_ready() {
                    match this.pending.take() {
                        Some(item) if this.options.trailing => {
                            // Trailing emission opens the next window
                            this.sleep.set(Some(timer.sleep_future(*this.wait)));
                            return Poll::Ready(Some(item));
                        }
                        _ => this.sleep.set(None),
                    }
                }
            }

            // 2. Poll source stream
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    if this.sleep.is_none() {
                        // Fresh window
                        this.sleep.set(Some(timer.sleep_future(*this.wait)));
                        if this.options.leading {
                            return Poll::Ready(Some(item));
                        }
                    }
                    *this.pending = Some(item);
                    continue;
                }
                Poll::Ready(None) => {
                    *this.stream_ended = true;
                    continue;
                }
                Poll::Pending => {
                    // this.sleep.poll(cx) above registered the waker if a window is open.
                    // this.stream.poll_next(cx) registered the waker for the source.
                    return Poll::Pending;
                }
            }
        }
    }
}
