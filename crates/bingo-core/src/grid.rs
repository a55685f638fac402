// SPDX-License-Identifier: MIT
//
// Grid — the 2D cell array one card is made of, plus Card itself.
//
// Flat `Vec<Cell>` with row-major indexing, sized by the variant at
// construction and never resized: a cell's (row, col) address is fixed
// once placed. The builders in `layout` fill grids in; everything
// downstream (dedup, batching, rendering) only reads them.
//
// Cards and grids are created fresh per generation request and fully
// replace prior output — there is no persisted identity between runs.

use crate::cell::Cell;
use crate::variant::BingoVariant;

// ─── Grid ────────────────────────────────────────────────────────────────────

/// A fixed-shape 2D array of [`Cell`], row-major, 0-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    variant: BingoVariant,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-blank grid shaped for `variant`.
    #[must_use]
    pub fn new(variant: BingoVariant) -> Self {
        Self {
            variant,
            cells: vec![Cell::Blank; variant.rows() * variant.cols()],
        }
    }

    /// The variant this grid was shaped for.
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> BingoVariant {
        self.variant
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.variant.rows()
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.variant.cols()
    }

    /// Flat index for (row, col).
    ///
    /// # Panics
    ///
    /// Panics when the address is outside the grid (programmer error).
    fn idx(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows() && col < self.cols(),
            "cell ({row}, {col}) out of range for the {}-ball grid",
            self.variant.name()
        );
        row * self.cols() + col
    }

    /// The cell at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.idx(row, col)]
    }

    /// Replace the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.idx(row, col);
        self.cells[idx] = cell;
    }

    /// One row of cells, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.idx(row, 0);
        &self.cells[start..start + self.cols()]
    }

    /// Every number on the grid, in row-major cell order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().filter_map(Cell::number)
    }

    /// How many cells hold a number.
    #[must_use]
    pub fn number_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_number()).count()
    }

    /// How many cells in `col` hold a number.
    #[must_use]
    pub fn column_number_count(&self, col: usize) -> usize {
        (0..self.rows())
            .filter(|&row| self.get(row, col).is_number())
            .count()
    }
}

// ─── Card ────────────────────────────────────────────────────────────────────

/// A finished card: a grid plus its display id.
///
/// Ids are sequential and 1-based within one generation run, assigned in
/// generation order across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: u32,
    grid: Grid,
}

impl Card {
    /// Wrap a grid with its display id.
    #[must_use]
    pub const fn new(id: u32, grid: Grid) -> Self {
        Self { id, grid }
    }

    /// 1-based display id within the run.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The variant this card was built for.
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> BingoVariant {
        self.grid.variant()
    }

    /// The card's cell grid.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
