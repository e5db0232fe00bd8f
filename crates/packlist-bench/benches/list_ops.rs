//! Criterion micro-benchmarks for the list itself: append growth, bulk
//! fill, and in-place sort.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use packlist_bench::seeded_values;
use packlist_core::IntList;

/// Benchmark: push 10K elements onto an empty list (amortised growth).
fn bench_push_10k(c: &mut Criterion) {
    let values = seeded_values(10_000, 7);

    c.bench_function("list_push_10k", |b| {
        b.iter(|| {
            let mut list = IntList::new();
            for &v in &values {
                list.push(v);
            }
            black_box(&list);
        });
    });
}

/// Benchmark: sort a 10K-element list.
fn bench_sort_10k(c: &mut Criterion) {
    let values = seeded_values(10_000, 7);

    c.bench_function("list_sort_10k", |b| {
        b.iter(|| {
            let mut list = IntList::from_slice(&values);
            list.sort();
            black_box(&list);
        });
    });
}

/// Benchmark: bulk fill across the full length.
fn bench_fill_10k(c: &mut Criterion) {
    let mut list = IntList::from_slice(&seeded_values(10_000, 7));

    c.bench_function("list_fill_10k", |b| {
        b.iter(|| {
            list.fill(0, 10_000, black_box(-1)).unwrap();
            black_box(&list);
        });
    });
}

criterion_group!(benches, bench_push_10k, bench_sort_10k, bench_fill_10k);
criterion_main!(benches);
