// SPDX-License-Identifier: MIT
//
// Batch generation — pages of cards, one synchronous call.
//
// `generate` builds the whole run before returning: computes the page
// count, builds each page's raw grids under the variant's sharing
// policy, passes every card through the run-wide duplicate guard, and
// numbers the cards sequentially. All state (the RNG stream aside) is
// local to the call; there is nothing to cancel and nothing left behind.
//
// The 75-ball shared-pool policy models physical card sets: cards at
// page-relative slots {g, g+3, g+6} form a triplet, and each of a
// triplet's columns is one fifteen shuffled once and dealt 5/5/5 in draw
// order down the triplet. Opting into repeats draws every card alone.

use rand::Rng;

use crate::cell::FreeStyle;
use crate::dedup::Deduplicator;
use crate::grid::{Card, Grid};
use crate::layout;
use crate::options::GenerateOptions;
use crate::range::column_range;
use crate::shuffle::shuffled;
use crate::variant::BingoVariant;

// ─── Page ────────────────────────────────────────────────────────────────────

/// One printed sheet of cards, at most [`BingoVariant::cards_per_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    cards: Vec<Card>,
}

impl Page {
    /// The cards on this page, in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many cards this page holds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the page holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Generate a full batch of pages.
///
/// A non-positive card count yields no pages. The last page may hold
/// fewer cards than the variant's page capacity. Every card passes
/// through the run's duplicate guard, so two cards in one batch share a
/// number set only after the guard's rebuild budget is exhausted.
#[must_use]
pub fn generate<R: Rng + ?Sized>(rng: &mut R, options: &GenerateOptions) -> Vec<Page> {
    let total = options.requested();
    if total == 0 {
        return Vec::new();
    }

    let per_page = options.variant.cards_per_page();
    let page_count = total.div_ceil(per_page);

    let mut dedup = Deduplicator::new();
    let mut pages = Vec::with_capacity(page_count);
    let mut next_id: u32 = 1;

    for page_index in 0..page_count {
        let count = per_page.min(total - page_index * per_page);
        let grids = page_grids(rng, options, count);

        let mut cards = Vec::with_capacity(count);
        for grid in grids {
            let grid = dedup.admit(rng, grid, |rng| rebuild(rng, options));
            cards.push(Card::new(next_id, grid));
            next_id += 1;
        }
        pages.push(Page { cards });
    }
    pages
}

/// Raw grids for one page, before deduplication.
fn page_grids<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GenerateOptions,
    count: usize,
) -> Vec<Grid> {
    match options.variant {
        BingoVariant::SeventyFive if !options.allow_repeats_within_pool => {
            shared_pool_page(rng, count, options.free_space.as_ref())
        }
        BingoVariant::SeventyFive => (0..count)
            .map(|_| layout::seventy_five(rng, options.free_space.as_ref()))
            .collect(),
        BingoVariant::Ninety => (0..count).map(|_| layout::ninety(rng)).collect(),
    }
}

/// The independent rebuild path used when a card collides.
///
/// Shared-pool cards rebuild with fresh independent draws: re-dealing
/// the triplet's pool would only reproduce the same card.
fn rebuild<R: Rng + ?Sized>(rng: &mut R, options: &GenerateOptions) -> Grid {
    match options.variant {
        BingoVariant::SeventyFive => layout::seventy_five(rng, options.free_space.as_ref()),
        BingoVariant::Ninety => layout::ninety(rng),
    }
}

/// One 75-ball page under the shared-pool policy.
///
/// Slots {0,3,6}, {1,4,7} and {2,5,8} each share one full-column
/// shuffle, split five values apiece in draw order. Slots past `count`
/// simply don't take their share (short last page).
fn shared_pool_page<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    free_space: Option<&FreeStyle>,
) -> Vec<Grid> {
    let variant = BingoVariant::SeventyFive;
    let rows = variant.rows();

    let mut columns: Vec<Vec<Vec<u8>>> = vec![vec![Vec::new(); variant.cols()]; count];
    for group in 0..3 {
        let members: Vec<usize> = (group..count).step_by(3).collect();
        if members.is_empty() {
            continue;
        }
        for col in 0..variant.cols() {
            let pool = shuffled(rng, column_range(variant, col));
            for (slot, &card) in members.iter().enumerate() {
                columns[card][col] = pool[slot * rows..(slot + 1) * rows].to_vec();
            }
        }
    }

    columns
        .iter()
        .map(|card_columns| layout::seventy_five_from_columns(card_columns, free_space))
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
