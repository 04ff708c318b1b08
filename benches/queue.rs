// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benchmarks for the linked-list queue.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single-threaded push, pop and interleaved workloads
//! - Teardown of large queues
//! - Multi-threaded pushes through the lock-guarded queue

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use queue_demo_rs::{Queue, SharedQueue};
use rayon::prelude::*;
use std::collections::VecDeque;

// =============================================================================
// Single-Threaded Benchmarks
// =============================================================================

fn bench_single_push_pop(c: &mut Criterion) {
    c.bench_function("single_push_pop", |b| {
        let mut queue = Queue::new();
        b.iter(|| {
            queue.push(black_box(42i64));
            black_box(queue.pop().unwrap());
        })
    });
}

fn bench_push_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_throughput");

    for count in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let mut queue = Queue::new();
                for i in 0..count {
                    queue.push(i as i64);
                }
                black_box(&queue);
            })
        });
    }
    group.finish();
}

fn bench_fill_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_and_drain");

    for count in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("linked", count), count, |b, &count| {
            b.iter(|| {
                let mut queue = Queue::new();
                for i in 0..count {
                    queue.push(i as i64);
                }
                while let Ok(value) = queue.pop() {
                    black_box(value);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("vecdeque", count), count, |b, &count| {
            b.iter(|| {
                let mut queue = VecDeque::new();
                for i in 0..count {
                    queue.push_back(i as i64);
                }
                while let Some(value) = queue.pop_front() {
                    black_box(value);
                }
            })
        });
    }
    group.finish();
}

fn bench_interleaved(c: &mut Criterion) {
    c.bench_function("interleaved_push2_pop1", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..10_000i64 {
                queue.push(i);
                queue.push(-i);
                black_box(queue.pop().unwrap());
            }
            black_box(queue.size());
        })
    });
}

// =============================================================================
// Teardown Benchmarks
// =============================================================================

fn bench_teardown(c: &mut Criterion) {
    let mut group = c.benchmark_group("teardown");

    for count in [10_000, 100_000, 1_000_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter_batched(
                || (0..count as i64).collect::<Queue<i64>>(),
                drop,
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

// =============================================================================
// Multi-Threaded Benchmarks
// =============================================================================

fn bench_parallel_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_push");

    for count in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let queue = SharedQueue::new();
                (0..count).into_par_iter().for_each(|i| queue.push(i as i64));
                black_box(queue.size());
            })
        });
    }
    group.finish();
}

fn bench_parallel_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_push_pop");

    for count in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let queue = SharedQueue::new();
                (0..count).into_par_iter().for_each(|i| {
                    queue.push(i as i64);
                    let _ = queue.pop();
                });
                black_box(queue.size());
            })
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(
    single_threaded,
    bench_single_push_pop,
    bench_push_throughput,
    bench_fill_and_drain,
    bench_interleaved,
);

criterion_group!(teardown, bench_teardown,);

criterion_group!(multi_threaded, bench_parallel_push, bench_parallel_push_pop,);

criterion_main!(single_threaded, teardown, multi_threaded);
