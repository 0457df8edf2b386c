// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, Stream, StreamExt};
use lull_test_utils::{test_channel, CallRecorder};
use lull_timing::{ThrottleExt, ThrottleOptions};
use std::pin::pin;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{sleep_until, Instant};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn feed<T: Send + 'static>(tx: UnboundedSender<T>, schedule: Vec<(u64, T)>, end_at: u64) {
    let start = Instant::now();
    tokio::spawn(async move {
        for (at, value) in schedule {
            sleep_until(start + ms(at)).await;
            tx.send(value).unwrap();
        }
        sleep_until(start + ms(end_at)).await;
    });
}

async fn drain<S, T>(stream: S, recorder: &CallRecorder<T>)
where
    S: Stream<Item = T>,
    T: Clone + Send + 'static,
{
    let record = recorder.callback();
    let mut stream = pin!(stream);
    while let Some(item) = stream.next().await {
        record(item);
    }
}

#[tokio::test(start_paused = true)]
async fn test_throttle_stream_defaults() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let (tx, source) = test_channel();
    feed(tx, vec![(0, 'a'), (10, 'b'), (20, 'c')], 200);

    // Act
    drain(source.throttle(ms(15)), &recorder).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(0, 'a'), (15, 'b'), (30, 'c')]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_stream_without_trailing() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let (tx, source) = test_channel();
    feed(tx, vec![(0, 1), (5, 2), (10, 3), (25, 4)], 100);
    let options = ThrottleOptions::default().with_trailing(false);

    // Act
    drain(source.throttle_with(ms(20), options), &recorder).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(0, 1), (25, 4)]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_stream_without_leading() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let (tx, source) = test_channel();
    feed(tx, vec![(0, 1), (5, 2)], 100);
    let options = ThrottleOptions::default().with_leading(false);

    // Act
    drain(source.throttle_with(ms(20), options), &recorder).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(20, 2)]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_stream_spacing_is_at_least_wait() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let (tx, source) = test_channel();
    let schedule = (0..40).map(|value| (value * 7 + 1, value)).collect();
    feed(tx, schedule, 500);

    // Act
    drain(source.throttle(ms(25)), &recorder).await;

    // Assert
    let times = recorder.times_ms();
    assert!(times.windows(2).all(|pair| pair[1] - pair[0] >= 25));
    assert_eq!(recorder.last(), Some(39));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_stream_end_emits_buffered_item() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let (tx, source) = test_channel();
    feed(tx, vec![(0, 1), (5, 2)], 10);

    // Act
    drain(source.throttle(ms(100)), &recorder).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(0, 1), (10, 2)]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_stream_ready_source_keeps_first_and_last() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(1..=5);

    // Act
    let items: Vec<i32> = source.throttle(ms(100)).collect().await;

    // Assert
    assert_eq!(items, vec![1, 5]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_stream_unbounded_wait_is_clamped() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(1..=3);

    // Act
    let items: Vec<i32> = source.throttle(Duration::MAX).collect().await;

    // Assert
    assert_eq!(items, vec![1, 3]);
    Ok(())
}
