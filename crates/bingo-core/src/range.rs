// SPDX-License-Identifier: MIT
//
// Column range table — which numbers each column owns.
//
// 75-ball columns are the classic B-I-N-G-O fifteens (B: 1-15 up to
// O: 61-75). 90-ball columns are tens (1-10, 11-20, …) with the last
// column running 81-90 so the global maximum lands on 90 exactly.

use std::ops::RangeInclusive;

use crate::variant::BingoVariant;

/// The inclusive number range owned by `col` under `variant`.
///
/// Pure lookup: the same `(variant, col)` always yields the same bounds.
///
/// # Panics
///
/// Panics if `col` is outside the variant's grid. Column indices come
/// from loops over [`BingoVariant::cols`], so an out-of-range index is a
/// programmer error and fails at the call site.
#[must_use]
pub fn column_range(variant: BingoVariant, col: usize) -> RangeInclusive<u8> {
    assert!(
        col < variant.cols(),
        "column {col} out of range for the {}-ball grid",
        variant.name()
    );
    let col = col as u8;
    match variant {
        BingoVariant::SeventyFive => {
            let start = col * 15 + 1;
            start..=start + 14
        }
        BingoVariant::Ninety => {
            let start = col * 10 + 1;
            let end = if col == 8 { 90 } else { (col + 1) * 10 };
            start..=end
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
