// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_buffer_window::{
    Item, LayoutParams, ListBounds, RangeSource, VirtualScroller, recompute, resolve,
};

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_window/recompute");

    // Hypothesis: recompute is O(buffer_count) and independent of list length.
    for len in [1_000usize, 1_000_000, 1_000_000_000] {
        let bounds = ListBounds::from_len(len);
        let layout = LayoutParams::new(24.0_f64, 40).with_tolerance(10);
        let constants = resolve(bounds, layout).unwrap().constants();
        let mut source = RangeSource::new(bounds, |i| i);
        let offset = constants.max_scroll_offset() * 0.5;

        group.throughput(Throughput::Elements(constants.buffer_count() as u64));
        group.bench_with_input(BenchmarkId::new("range_source", len), &offset, |b, &offset| {
            b.iter(|| black_box(recompute(black_box(offset), &constants, bounds, &mut source)));
        });
    }

    for tolerance in [0usize, 8, 64] {
        let bounds = ListBounds::from_len(1_000_000);
        let layout = LayoutParams::new(24.0_f64, 40).with_tolerance(tolerance);
        let constants = resolve(bounds, layout).unwrap().constants();
        let mut source = RangeSource::new(bounds, |i| i);

        group.throughput(Throughput::Elements(constants.buffer_count() as u64));
        group.bench_with_input(
            BenchmarkId::new("tolerance", tolerance),
            &tolerance,
            |b, _| {
                b.iter(|| black_box(recompute(black_box(12_000.0), &constants, bounds, &mut source)));
            },
        );
    }

    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_window/scroll_sweep");

    // A wheel-driven sweep: many small deltas through a large list.
    let bounds = ListBounds::new(-1000, 10_000);
    let layout = LayoutParams::new(40.0_f64, 12)
        .with_tolerance(4)
        .with_start_index(1);
    let steps = 2_000u64;
    group.throughput(Throughput::Elements(steps));
    group.bench_function("string_payloads", |b| {
        let mut scroller = VirtualScroller::activate(
            bounds,
            layout,
            |offset: i64, count: usize| -> Vec<Item<String>> {
                let start = offset.max(bounds.min_index);
                let end = offset
                    .saturating_add(count as i64 - 1)
                    .min(bounds.max_index);
                (start..=end)
                    .map(|i| Item::new(i, format!("I am data no. {i}")))
                    .collect()
            },
        )
        .unwrap();
        b.iter(|| {
            for step in 0..steps {
                black_box(scroller.on_scroll(step as f64 * 53.0));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_recompute, bench_scroll_sweep);
criterion_main!(benches);
