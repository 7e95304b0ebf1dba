// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification lifecycle.
//!
//! Measures the performance of:
//! - Showing a burst of messages
//! - Dismissing and finalizing them through the virtual clock
//! - Clearing a full store

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hover_messages::ui::notifications::{Manager, ManualClock, Severity};
use std::hint::black_box;
use std::time::Duration;

const BURST: usize = 100;

fn filled_manager() -> Manager<ManualClock> {
    let mut manager = Manager::manual();
    for (i, severity) in Severity::ALL.into_iter().cycle().take(BURST).enumerate() {
        manager.show(format!("message {i}"), severity);
    }
    manager
}

/// Benchmark showing a burst of messages, each publishing a snapshot.
fn bench_show(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    group.bench_function("show_burst", |b| {
        b.iter(|| black_box(filled_manager()));
    });

    group.finish();
}

/// Benchmark letting every timer run to completion.
fn bench_expire(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    group.bench_function("dismiss_and_expire", |b| {
        b.iter_batched(
            filled_manager,
            |mut manager| {
                let ids: Vec<_> = manager.visible().map(|n| n.id()).collect();
                for id in ids {
                    manager.dismiss(id);
                }
                manager.advance(Duration::from_secs(1));
                black_box(manager.visible_count())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("clear_all", |b| {
        b.iter_batched(
            filled_manager,
            |mut manager| {
                manager.clear_all();
                black_box(manager.visible_count())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_show, bench_expire);
criterion_main!(benches);
