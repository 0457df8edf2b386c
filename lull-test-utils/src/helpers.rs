// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep, timeout};

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!(
                "Unexpected item emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Next item of `stream`, or `None` if it ended or nothing arrived in time.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> Option<T>
where
    S: Stream<Item = T> + Unpin,
{
    timeout(Duration::from_millis(timeout_ms), stream.next())
        .await
        .ok()
        .flatten()
}

/// Receives from `rx`, giving up after `timeout_ms`.
pub async fn recv_timeout<T>(rx: &mut UnboundedReceiver<T>, timeout_ms: u64) -> Option<T> {
    timeout(Duration::from_millis(timeout_ms), rx.recv())
        .await
        .ok()
        .flatten()
}

/// Asserts nothing arrives on `rx` within `timeout_ms`.
pub async fn assert_no_recv<T>(rx: &mut UnboundedReceiver<T>, timeout_ms: u64) {
    if let Ok(Some(_)) = timeout(Duration::from_millis(timeout_ms), rx.recv()).await {
        panic!("Unexpected message received, expected none.");
    }
}

/// Lets spawned tasks that are ready to run make progress without moving the
/// clock.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
