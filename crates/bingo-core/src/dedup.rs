// SPDX-License-Identifier: MIT
//
// Duplicate guard — best-effort, never an error.
//
// Two cards are duplicates when they sell the same set of numbers; the
// blank pattern and free-space styling carry no identity. Each card's
// fingerprint is its sorted numbers joined into one string, and one
// Deduplicator owns the fingerprints of a single generation run.
//
// Collisions are resolved by rebuilding the card, up to a fixed budget.
// A card still colliding after the last rebuild is accepted and recorded
// anyway — the guard degrades silently rather than failing the run.

use std::collections::HashSet;

use rand::Rng;

use crate::grid::Grid;

/// How many rebuilds a colliding card gets before being accepted as-is.
pub const RETRY_BUDGET: usize = 100;

/// Canonical near-identity key for a card: every number it holds,
/// ascending, joined with '-'.
#[must_use]
pub fn fingerprint(grid: &Grid) -> String {
    let mut numbers: Vec<u8> = grid.numbers().collect();
    numbers.sort_unstable();
    numbers
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

/// Duplicate guard for one generation run.
///
/// Owns the seen-set for the lifetime of a single `generate` call and is
/// discarded with it; nothing persists between runs.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    /// A guard with nothing seen yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many distinct fingerprints this run has recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Accept `grid`, rebuilding it while its fingerprint collides.
    ///
    /// `rebuild` must regenerate a card through the same layout path that
    /// produced `grid`. After [`RETRY_BUDGET`] rebuilds the last grid is
    /// accepted even if it still collides, and its fingerprint recorded.
    pub fn admit<R, F>(&mut self, rng: &mut R, grid: Grid, mut rebuild: F) -> Grid
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> Grid,
    {
        let mut grid = grid;
        let mut key = fingerprint(&grid);
        for _ in 0..RETRY_BUDGET {
            if !self.seen.contains(&key) {
                break;
            }
            grid = rebuild(rng);
            key = fingerprint(&grid);
        }
        self.seen.insert(key);
        grid
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::cell::Cell;
    use crate::grid::Grid;
    use crate::variant::BingoVariant;

    /// A tiny synthetic grid holding exactly the given numbers.
    fn grid_with(numbers: &[u8]) -> Grid {
        let mut grid = Grid::new(BingoVariant::Ninety);
        for (i, &n) in numbers.iter().enumerate() {
            grid.set(i / 9, i % 9, Cell::Number(n));
        }
        grid
    }

    #[test]
    fn fingerprint_sorts_and_joins() {
        let grid = grid_with(&[30, 4, 17]);
        assert_eq!(fingerprint(&grid), "4-17-30");
    }

    #[test]
    fn fingerprint_ignores_cell_positions() {
        let a = grid_with(&[1, 2, 3]);
        let mut b = Grid::new(BingoVariant::Ninety);
        b.set(2, 8, Cell::Number(3));
        b.set(2, 7, Cell::Number(1));
        b.set(0, 4, Cell::Number(2));
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn empty_grid_has_empty_fingerprint() {
        assert_eq!(fingerprint(&Grid::new(BingoVariant::SeventyFive)), "");
    }

    #[test]
    fn fresh_card_is_accepted_without_rebuilding() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut dedup = Deduplicator::new();
        let mut rebuilds = 0;
        let grid = dedup.admit(&mut rng, grid_with(&[1, 2, 3]), |_| {
            rebuilds += 1;
            grid_with(&[7, 8, 9])
        });
        assert_eq!(rebuilds, 0);
        assert_eq!(fingerprint(&grid), "1-2-3");
        assert_eq!(dedup.len(), 1);
    }

    #[test]
    fn collision_triggers_rebuild() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut dedup = Deduplicator::new();
        let first = dedup.admit(&mut rng, grid_with(&[1, 2, 3]), |_| unreachable!());
        assert_eq!(fingerprint(&first), "1-2-3");

        // Same numbers, different layout: still a duplicate.
        let mut rebuilds = 0;
        let second = dedup.admit(&mut rng, grid_with(&[3, 2, 1]), |_| {
            rebuilds += 1;
            grid_with(&[4, 5, 6])
        });
        assert_eq!(rebuilds, 1);
        assert_eq!(fingerprint(&second), "4-5-6");
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn exhausted_budget_accepts_the_duplicate_silently() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut dedup = Deduplicator::new();
        let _ = dedup.admit(&mut rng, grid_with(&[1, 2, 3]), |_| unreachable!());

        // Rebuild never escapes the collision.
        let mut rebuilds = 0;
        let stuck = dedup.admit(&mut rng, grid_with(&[1, 2, 3]), |_| {
            rebuilds += 1;
            grid_with(&[2, 1, 3])
        });
        assert_eq!(rebuilds, RETRY_BUDGET);
        assert_eq!(fingerprint(&stuck), "1-2-3");
        // Recording is idempotent: still one distinct fingerprint.
        assert_eq!(dedup.len(), 1);
    }

    #[test]
    fn new_guard_is_empty() {
        let dedup = Deduplicator::new();
        assert!(dedup.is_empty());
        assert_eq!(dedup.len(), 0);
    }
}
