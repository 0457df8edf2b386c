// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lull_core::LullError;
use lull_test_utils::{settle, CallRecorder};
use lull_timing::{throttle, ThrottleOptions, Throttled, MAX_DELAY};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::time::sleep;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[tokio::test(start_paused = true)]
async fn test_throttle_defaults_leading_then_latest_trailing() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(15), ThrottleOptions::default());

    // Act & Assert - t=0 fires immediately
    throttled.call('a');
    assert_eq!(recorder.calls(), vec![(0, 'a')]);

    // t=10 is suppressed
    sleep(ms(10)).await;
    throttled.call('b');
    assert_eq!(recorder.count(), 1);

    // t=20
    sleep(ms(10)).await;
    throttled.call('c');
    sleep(ms(100)).await;

    // Nothing ever fired at t=10; the latest arguments arrive after t=20
    let calls = recorder.calls();
    assert!(calls.iter().all(|(at, _)| *at != 10));
    assert_eq!(calls.last(), Some(&(30, 'c')));
    assert_eq!(calls, vec![(0, 'a'), (15, 'b'), (30, 'c')]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_trailing_uses_last_suppressed_args() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), ms(100), ThrottleOptions::default());

    // Act
    throttled.call(1);
    for value in 2..=5 {
        sleep(ms(10)).await;
        throttled.call(value);
    }
    sleep(ms(300)).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(0, 1), (100, 5)]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_idle_window_closes_and_next_call_leads() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(50), ThrottleOptions::default());

    // Act
    throttled.call(1);
    sleep(ms(80)).await;
    throttled.call(2);
    sleep(ms(10)).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(0, 1), (80, 2)]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_without_leading_defers_first_call() {
    // Arrange
    let recorder = CallRecorder::new();
    let options = ThrottleOptions::default().with_leading(false);
    let throttled = Throttled::new(recorder.callback(), ms(20), options);

    // Act
    throttled.call(1);
    sleep(ms(5)).await;
    throttled.call(2);
    assert_eq!(recorder.count(), 0);
    sleep(ms(100)).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(20, 2)]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_without_trailing_drops_suppressed_calls() {
    // Arrange
    let recorder = CallRecorder::new();
    let options = ThrottleOptions::default().with_trailing(false);
    let throttled = Throttled::new(recorder.callback(), ms(20), options);

    // Act
    throttled.call(1);
    sleep(ms(5)).await;
    throttled.call(2);
    sleep(ms(5)).await;
    throttled.call(3);
    sleep(ms(15)).await;
    throttled.call(4);
    sleep(ms(100)).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(0, 1), (25, 4)]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_invocation_count_is_bounded() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(10), ThrottleOptions::default());

    // Act - a call every 3ms for 150ms
    for value in 0..50 {
        throttled.call(value);
        sleep(ms(3)).await;
    }
    sleep(ms(100)).await;

    // Assert
    let times = recorder.times_ms();
    let first = times[0];
    let last = *times.last().unwrap();
    let bound = (last - first).div_ceil(10) + 1;
    assert!(times.len() as u128 <= bound);
    assert!(times.windows(2).all(|pair| pair[1] - pair[0] >= 10));
    assert_eq!(recorder.last(), Some(49));
}

#[tokio::test(start_paused = true)]
async fn test_throttle_cancel_clears_trailing_and_resets_window() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(100), ThrottleOptions::default());
    throttled.call(1);
    sleep(ms(5)).await;
    throttled.call(2);

    // Act
    throttled.cancel();
    sleep(ms(200)).await;

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert!(!throttled.is_pending());

    // A fresh window starts with the next call
    throttled.call(3);
    assert_eq!(recorder.calls(), vec![(0, 1), (205, 3)]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_cancel_inside_window_allows_immediate_leading() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(100), ThrottleOptions::default());
    throttled.call(1);

    // Act
    throttled.cancel();
    throttled.call(2);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_flush_runs_pending_trailing_call() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(100), ThrottleOptions::default());
    throttled.call(1);
    throttled.call(2);
    sleep(ms(30)).await;

    // Act
    let flushed = throttled.flush();

    // Assert
    assert!(flushed);
    assert_eq!(recorder.calls(), vec![(0, 1), (30, 2)]);
    assert!(!throttled.is_pending());
    sleep(ms(300)).await;
    assert_eq!(recorder.count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_flush_without_pending_call_is_noop() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(100), ThrottleOptions::default());

    // Act & Assert
    assert!(!throttled.flush());
    throttled.call(1);
    assert!(!throttled.flush());
    assert!(throttled.is_pending());
    assert_eq!(recorder.values(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_drop_cancels_pending_trailing_call() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(100), ThrottleOptions::default());
    throttled.call(1);
    throttled.call(2);
    settle().await;

    // Act
    drop(throttled);
    sleep(ms(300)).await;

    // Assert
    assert_eq!(recorder.values(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn test_throttle_window_stays_closed_after_trailing_call() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(50), ThrottleOptions::default());

    // Act - the trailing call at t=50 opens the window [50, 100)
    throttled.call(1);
    sleep(ms(10)).await;
    throttled.call(2);
    sleep(ms(50)).await;
    throttled.call(3);
    sleep(ms(200)).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(0, 1), (50, 2), (100, 3)]);
}

#[test]
fn test_throttle_try_call_without_runtime_reports_error() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), ms(100), ThrottleOptions::default());

    // Act
    let result = throttled.try_call(1);

    // Assert
    assert!(matches!(result, Err(LullError::NoRuntime { .. })));
    assert_eq!(recorder.count(), 0);
    assert!(!throttled.is_pending());
}

#[test]
fn test_throttle_accessors() {
    let options = ThrottleOptions::default().with_trailing(false);
    let throttled = Throttled::new(|_: u8| {}, ms(40), options);

    assert_eq!(throttled.wait(), ms(40));
    assert_eq!(throttled.options(), options);
    assert!(format!("{throttled:?}").starts_with("Throttled"));
}

#[tokio::test(start_paused = true)]
async fn test_throttle_unbounded_wait_is_clamped() {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = Throttled::new(recorder.callback(), Duration::MAX, ThrottleOptions::default());

    // Act
    throttled.call(1);
    throttled.call(2);
    sleep(ms(1_000)).await;

    // Assert - the window is open for the clamped delay
    assert_eq!(recorder.calls(), vec![(0, 1)]);
    assert!(throttled.is_pending());
    assert_eq!(throttled.wait(), MAX_DELAY);

    assert!(throttled.flush());
    assert_eq!(recorder.calls(), vec![(0, 1), (1_000, 2)]);
}

type BoxedCallback = Box<dyn Fn(i32) + Send + Sync>;

#[tokio::test(start_paused = true)]
async fn test_throttle_callback_can_call_wrapper_again() {
    // Arrange
    let recorder = CallRecorder::new();
    let record = recorder.callback();
    let slot: Arc<OnceLock<Throttled<i32, BoxedCallback>>> = Arc::new(OnceLock::new());
    let handle = Arc::clone(&slot);
    let callback: BoxedCallback = Box::new(move |value| {
        record(value);
        if value < 3 {
            if let Some(throttled) = handle.get() {
                throttled.call(value + 1);
            }
        }
    });
    let _ = slot.set(Throttled::new(callback, ms(100), ThrottleOptions::default()));
    let throttled = slot.get().unwrap();

    // Act - the leading call queues the next one from inside the callback
    throttled.call(1);
    sleep(ms(500)).await;

    // Assert
    assert_eq!(recorder.calls(), vec![(0, 1), (100, 2), (200, 3)]);
    assert!(!throttled.is_pending());
}
