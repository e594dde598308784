//! Mark/drain benchmarks.
//!
//! These measure the two steady states of the tracker: clustered IDs that
//! land densely inside a few blocks, and scattered IDs that touch a fresh
//! block almost every time.
//!
//! Run with:
//! ```bash
//! cargo bench --bench drain
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use id_tracker::tracker::IdTracker;
use id_tracker::types::{Id, NO_MORE_IDS};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Clustered workload: ids drawn from a range spanning a handful of blocks.
fn clustered_ids(n: usize, seed: u64) -> Vec<Id> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..(n as Id * 4))).collect()
}

/// Scattered workload: ids spread over a vastly larger range than the
/// count, so almost every mark allocates its own block.
fn scattered_ids(n: usize, seed: u64) -> Vec<Id> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..1_000_000_000_000i64)).collect()
}

fn drain_all(tracker: &mut IdTracker) -> usize {
    let mut count = 0;
    while tracker.pop_mark() != NO_MORE_IDS {
        count += 1;
    }
    count
}

fn bench_mark_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("mark_drain");

    for &n in &[10_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));

        let ids = clustered_ids(n, 42);
        group.bench_with_input(BenchmarkId::new("clustered", n), &ids, |b, ids| {
            b.iter(|| {
                let mut tracker = IdTracker::new();
                for &id in ids {
                    tracker.mark(id);
                }
                drain_all(&mut tracker)
            })
        });

        let ids = scattered_ids(n, 42);
        group.bench_with_input(BenchmarkId::new("scattered", n), &ids, |b, ids| {
            b.iter(|| {
                let mut tracker = IdTracker::new();
                for &id in ids {
                    tracker.mark(id);
                }
                drain_all(&mut tracker)
            })
        });
    }

    group.finish();
}

fn bench_is_marked(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_marked");

    let n = 100_000;
    let ids = clustered_ids(n, 7);
    let mut tracker = IdTracker::new();
    for &id in &ids {
        tracker.mark(id);
    }

    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("hit_and_miss", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &id in &ids {
                if tracker.is_marked(id) {
                    hits += 1;
                }
                if tracker.is_marked(id + 1) {
                    hits += 1;
                }
            }
            hits
        })
    });

    group.finish();
}

criterion_group!(benches, bench_mark_drain, bench_is_marked);
criterion_main!(benches);
