// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main};

mod call_bench;

use call_bench::bench_calls;
use stream_bench::bench_streams;

criterion_group!(benches, bench_calls, bench_streams);
criterion_main!(benches);
