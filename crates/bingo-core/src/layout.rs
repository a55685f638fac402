// SPDX-License-Identifier: MIT
//
// Card layout builders — the structural rules of each variant.
//
// Both builders produce a finished Grid from a random source and nothing
// else. The 75-ball builder fills every column with a fresh five-number
// draw in permutation order; the 90-ball builder first decides the blank
// pattern row by row, then numbers each column with exactly as many
// values as it needs and hands them out ascending.
//
// A quirk carried over from the shipped generator: enabling the free
// space overwrites the center cell after column 2 has already drawn all
// five of its values. The displaced number is discarded, not returned to
// the pool, so column 2 fields four numbers out of a five-value draw.

use rand::Rng;

use crate::cell::{Cell, FreeStyle};
use crate::grid::Grid;
use crate::range::column_range;
use crate::shuffle::draw_distinct;
use crate::variant::BingoVariant;

/// Address of the 75-ball free space: the grid center.
pub const FREE_SPACE: (usize, usize) = (2, 2);

/// Numbers per 90-ball row; the remaining four cells stay blank.
pub const NINETY_NUMBERS_PER_ROW: usize = 5;

// ─── 75-ball ─────────────────────────────────────────────────────────────────

/// Build one 75-ball grid.
///
/// Each column draws five distinct values from its fifteen and places
/// them top to bottom in draw order — columns deliberately do not read
/// ascending, unlike the 90-ball variant. `free_space` then decorates
/// the center cell, or leaves all 25 numbers in place when `None`.
#[must_use]
pub fn seventy_five<R: Rng + ?Sized>(rng: &mut R, free_space: Option<&FreeStyle>) -> Grid {
    let variant = BingoVariant::SeventyFive;
    let columns: Vec<Vec<u8>> = (0..variant.cols())
        .map(|col| draw_distinct(rng, column_range(variant, col), variant.rows()))
        .collect();
    seventy_five_from_columns(&columns, free_space)
}

/// Build a 75-ball grid from pre-drawn column values.
///
/// `columns[c]` holds column `c`'s values, top to bottom. This is the
/// assembly half of [`seventy_five`], split out so shared-pool batches
/// can draw a triplet's columns together and still build cards the same
/// way.
///
/// # Panics
///
/// Panics unless exactly 5 columns of 5 values are supplied.
#[must_use]
pub fn seventy_five_from_columns(columns: &[Vec<u8>], free_space: Option<&FreeStyle>) -> Grid {
    let variant = BingoVariant::SeventyFive;
    assert_eq!(columns.len(), variant.cols(), "need one value set per column");

    let mut grid = Grid::new(variant);
    for (col, values) in columns.iter().enumerate() {
        assert_eq!(values.len(), variant.rows(), "column {col} needs one value per row");
        for (row, &value) in values.iter().enumerate() {
            grid.set(row, col, Cell::Number(value));
        }
    }
    if let Some(style) = free_space {
        // Overwrites whatever number landed here; see the module header.
        grid.set(FREE_SPACE.0, FREE_SPACE.1, Cell::Free(style.clone()));
    }
    grid
}

// ─── 90-ball ─────────────────────────────────────────────────────────────────

/// Build one 90-ball grid: 15 numbers, 12 blanks, 5 numbers per row.
///
/// The blank pattern is chosen independently per row (shuffle the nine
/// column indices, keep five). Rows do not coordinate, so a column can
/// end up with anything from zero to three numbers — there is no
/// balancing pass. Within each numbered column, values read ascending
/// top to bottom while the blank pattern stays untouched.
#[must_use]
pub fn ninety<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let variant = BingoVariant::Ninety;
    let mut grid = Grid::new(variant);

    // Row sparsity: each row keeps 5 of its 9 cells.
    let mut numbered = [[false; 9]; 3];
    for row in &mut numbered {
        for col in draw_distinct(rng, 0..=8, NINETY_NUMBERS_PER_ROW) {
            row[usize::from(col)] = true;
        }
    }

    // Number each column with exactly as many values as rows selected
    // it, sorted so the column reads ascending.
    for col in 0..variant.cols() {
        let rows: Vec<usize> = (0..variant.rows()).filter(|&r| numbered[r][col]).collect();
        let mut values = draw_distinct(rng, column_range(variant, col), rows.len());
        values.sort_unstable();
        for (&row, value) in rows.iter().zip(values) {
            grid.set(row, col, Cell::Number(value));
        }
    }
    grid
}

// ─── Tests ───────────────────────────────────────────────────────────────────
