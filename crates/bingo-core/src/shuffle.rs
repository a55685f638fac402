// SPDX-License-Identifier: MIT
//
// Unbiased draws from integer pools.
//
// Everything above this module consumes shuffled number pools: whole
// pools for shared-pool batches, k-of-n draws for single columns. Both
// ride on Fisher-Yates via `rand`, so every ordering of the pool is
// equally likely given a uniform random source. No state survives a
// call; the caller owns the RNG.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `k` distinct values from an inclusive pool, in random order.
///
/// Semantically shuffle-then-take-k, but only the first `k` positions
/// are permuted (partial Fisher-Yates), so a 15-wide pool drawn 5 deep
/// does a third of the swaps. Asking for more than the pool holds
/// yields the whole pool, shuffled. An empty pool yields nothing.
#[must_use]
pub fn draw_distinct<R: Rng + ?Sized>(rng: &mut R, pool: RangeInclusive<u8>, k: usize) -> Vec<u8> {
    let mut values: Vec<u8> = pool.collect();
    let (drawn, _) = values.partial_shuffle(rng, k);
    drawn.to_vec()
}

/// Shuffle the whole pool.
#[must_use]
pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, pool: RangeInclusive<u8>) -> Vec<u8> {
    let mut values: Vec<u8> = pool.collect();
    values.shuffle(rng);
    values
}

// ─── Tests ───────────────────────────────────────────────────────────────────
