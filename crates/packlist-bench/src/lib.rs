//! Benchmark inputs for the packlist codec.
//!
//! Provides deterministic, seeded value generation so benchmark runs are
//! comparable across machines and invocations.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate `n` pseudo-random `i32` values from a fixed seed.
pub fn seeded_values(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

/// A schedule of list lengths oscillating below `max_len`, mimicking the
/// varying message sizes a reused decode buffer sees in practice.
pub fn oscillating_lengths(cycles: usize, max_len: usize) -> Vec<usize> {
    (0..cycles)
        .map(|i| {
            let phase = i % 7;
            (max_len / 7) * (phase + 1)
        })
        .collect()
}
