// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use lull_timing::{DebounceOptions, Debounced, ThrottleOptions, Throttled};
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time::advance;

pub fn bench_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapper_call_burst");
    let bursts = [10usize, 1_000];

    for &burst in &bursts {
        group.throughput(Throughput::Elements(burst as u64));

        group.bench_with_input(BenchmarkId::new("debounce", burst), &burst, |bencher, &burst| {
            bencher.iter(|| {
                let rt = Builder::new_current_thread()
                    .enable_time()
                    .start_paused(true)
                    .build()
                    .unwrap();

                rt.block_on(async {
                    let fired = Arc::new(AtomicUsize::new(0));
                    let counter = fired.clone();
                    let debounced = Debounced::new(
                        move |value: usize| {
                            counter.fetch_add(black_box(value), Ordering::Relaxed);
                        },
                        Duration::from_millis(10),
                        DebounceOptions::default(),
                    );

                    for value in 0..burst {
                        debounced.call(value);
                    }
                    advance(Duration::from_millis(20)).await;
                    black_box(fired.load(Ordering::Relaxed));
                });
            });
        });

        group.bench_with_input(BenchmarkId::new("throttle", burst), &burst, |bencher, &burst| {
            bencher.iter(|| {
                let rt = Builder::new_current_thread()
                    .enable_time()
                    .start_paused(true)
                    .build()
                    .unwrap();

                rt.block_on(async {
                    let fired = Arc::new(AtomicUsize::new(0));
                    let counter = fired.clone();
                    let throttled = Throttled::new(
                        move |value: usize| {
                            counter.fetch_add(black_box(value), Ordering::Relaxed);
                        },
                        Duration::from_millis(10),
                        ThrottleOptions::default(),
                    );

                    for value in 0..burst {
                        throttled.call(value);
                    }
                    advance(Duration::from_millis(20)).await;
                    black_box(fired.load(Ordering::Relaxed));
                });
            });
        });
    }

    group.finish();
}
