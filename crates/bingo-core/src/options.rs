// SPDX-License-Identifier: MIT
//
// GenerateOptions — everything one generation call needs, passed
// explicitly. There is no ambient configuration: callers build an
// options value, hand it to `batch::generate`, and nothing persists
// afterwards.

use crate::cell::FreeStyle;
use crate::variant::BingoVariant;

/// Parameters for one batch generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Game format to build cards for.
    pub variant: BingoVariant,

    /// Requested number of cards. Zero or negative requests nothing —
    /// a valid empty run, not an error.
    pub card_count: i32,

    /// Center decoration for 75-ball cards; `None` keeps all 25
    /// numbers. 90-ball cards ignore this.
    pub free_space: Option<FreeStyle>,

    /// 75-ball only: draw every card's columns independently instead of
    /// splitting one shuffled pool across a page triplet. 90-ball cards
    /// always draw independently and ignore this.
    pub allow_repeats_within_pool: bool,
}

impl GenerateOptions {
    /// Stock options for a variant: one full page of cards, the default
    /// free-space text where the variant supports one, shared pools.
    #[must_use]
    pub fn for_variant(variant: BingoVariant) -> Self {
        Self {
            variant,
            card_count: variant.cards_per_page() as i32,
            free_space: variant.has_free_space().then(FreeStyle::default),
            allow_repeats_within_pool: false,
        }
    }

    /// How many cards were actually requested, clamped at zero.
    #[must_use]
    pub fn requested(&self) -> usize {
        usize::try_from(self.card_count).unwrap_or(0)
    }
}

impl Default for GenerateOptions {
    /// The stock setup: one page of 75-ball cards with a "FREE" center.
    fn default() -> Self {
        Self::for_variant(BingoVariant::SeventyFive)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
