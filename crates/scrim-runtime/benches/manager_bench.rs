//! Benchmarks for modal stack operations under no-op backends.
//!
//! Run with: cargo bench -p scrim-runtime --bench manager_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use scrim_backend::{FocusScope, HistoryBackend};
use scrim_core::{HistoryLevel, ModalRequest};
use scrim_runtime::ModalManager;
use std::hint::black_box;

/// History backend that only tracks the level.
#[derive(Default)]
struct NullHistory {
    level: HistoryLevel,
}

impl HistoryBackend for NullHistory {
    fn level(&self) -> HistoryLevel {
        self.level
    }

    fn push_level(&mut self, level: HistoryLevel) {
        self.level = level;
    }

    fn replace_level(&mut self, level: HistoryLevel) {
        self.level = level;
    }

    fn request_back(&mut self) {}
}

/// Focus scope that does nothing.
#[derive(Default)]
struct NullFocus;

impl FocusScope for NullFocus {
    type Handle = u32;

    fn blur_active(&mut self) {}
    fn hide(&mut self, _root: &u32) {}
    fn restore(&mut self, _root: &u32) {}
}

fn manager() -> ModalManager<NullHistory, NullFocus> {
    ModalManager::new(NullHistory::default(), NullFocus)
}

/// Open `depth` layers, each a child of the previous.
fn fill_chain(m: &mut ModalManager<NullHistory, NullFocus>, depth: usize) {
    for i in 0..depth {
        let req = if i == 0 {
            ModalRequest::new(format!("m{i}"), i as u32)
        } else {
            ModalRequest::new(format!("m{i}"), i as u32).child_of(format!("m{}", i - 1))
        };
        m.push(req).unwrap();
    }
}

fn bench_push_pop_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager/push_pop");

    for depth in [1usize, 4, 16] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::new("cycle", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut m = manager();
                fill_chain(&mut m, depth);
                while m.pop() {}
                black_box(m.depth())
            })
        });
    }

    group.finish();
}

fn bench_cascade_close(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager/cascade_close");

    for depth in [4usize, 16, 64] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::new("close_root", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut m = manager();
                fill_chain(&mut m, depth);
                m.close(black_box(&"m0".into()));
                black_box(m.depth())
            })
        });
    }

    group.finish();
}

fn bench_back_unwind(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager/back_unwind");

    for depth in [4usize, 16, 64] {
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::new("to_root", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut m = manager();
                fill_chain(&mut m, depth);
                m.handle_back_navigation(HistoryLevel::ROOT);
                black_box(m.depth())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop_cycle,
    bench_cascade_close,
    bench_back_unwind
);
criterion_main!(benches);
