//! Criterion micro-benchmarks for encode/decode and the two capacity
//! reconciliation policies.
//!
//! The interesting comparison is `decode_fresh` vs `decode_reused`: the
//! reuse-biased path should hold a flat allocation profile once the
//! buffer has reached its high-water mark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use packlist_bench::{oscillating_lengths, seeded_values};
use packlist_codec::{decode, decode_into, encode, ResizePolicy};
use packlist_core::IntList;

/// Pre-encode one stream per length in the schedule.
fn encoded_streams(lengths: &[usize], seed: u64) -> Vec<Vec<u8>> {
    lengths
        .iter()
        .map(|&n| {
            let list = IntList::from_slice(&seeded_values(n, seed));
            let mut buf = Vec::with_capacity(8 + n * 4);
            encode(&mut buf, &list).unwrap();
            buf
        })
        .collect()
}

/// Benchmark: encode a 1K-element list into a pre-sized sink.
fn bench_encode_1k(c: &mut Criterion) {
    let list = IntList::from_slice(&seeded_values(1_000, 42));
    let mut buf = Vec::with_capacity(8 + 1_000 * 4);

    c.bench_function("codec_encode_1k_i32", |b| {
        b.iter(|| {
            buf.clear();
            encode(&mut buf, &list).unwrap();
            black_box(&buf);
        });
    });
}

/// Benchmark: one-shot decode, allocating a fresh list per stream.
fn bench_decode_fresh(c: &mut Criterion) {
    let streams = encoded_streams(&oscillating_lengths(64, 1_000), 42);

    c.bench_function("codec_decode_fresh", |b| {
        b.iter(|| {
            for buf in &streams {
                let list: IntList<i32> = decode(&mut buf.as_slice()).unwrap();
                black_box(&list);
            }
        });
    });
}

/// Benchmark: reuse-biased decode into one long-lived list.
fn bench_decode_reused(c: &mut Criterion) {
    let streams = encoded_streams(&oscillating_lengths(64, 1_000), 42);

    c.bench_function("codec_decode_reused", |b| {
        b.iter(|| {
            let mut list = Some(IntList::<i32>::new());
            for buf in &streams {
                let decoded =
                    decode_into(&mut buf.as_slice(), list.take(), ResizePolicy::GrowOnly)
                        .unwrap();
                list = Some(decoded);
            }
            black_box(&list);
        });
    });
}

/// Benchmark: exact-policy decode, resizing to match every stream.
fn bench_decode_exact(c: &mut Criterion) {
    let streams = encoded_streams(&oscillating_lengths(64, 1_000), 42);

    c.bench_function("codec_decode_exact", |b| {
        b.iter(|| {
            let mut list = Some(IntList::<i32>::new());
            for buf in &streams {
                let decoded = decode_into(&mut buf.as_slice(), list.take(), ResizePolicy::Exact)
                    .unwrap();
                list = Some(decoded);
            }
            black_box(&list);
        });
    });
}

criterion_group!(
    benches,
    bench_encode_1k,
    bench_decode_fresh,
    bench_decode_reused,
    bench_decode_exact
);
criterion_main!(benches);
