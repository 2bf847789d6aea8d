//! Split search strategies
//!
//! For one serving size, find the cheapest way to serve it as two smaller,
//! already priced servings. Every strategy must agree exactly with the plain
//! ascending loop, including which split wins a tie.

use crate::core::{Price, WingCount};
use rayon::prelude::*;

/// Outcome of searching the splits of one serving size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Cheapest price found, `None` if the size cannot be served
    pub price: Option<Price>,
    /// Smaller half of the winning split, 0 if the seed price was kept
    pub split: WingCount,
}

impl SplitOutcome {
    /// Outcome that keeps the menu-seeded price
    #[inline]
    #[must_use]
    pub const fn seed(price: Option<Price>) -> Self {
        Self { price, split: 0 }
    }

    /// Whether `price` is strictly cheaper than the current best
    #[inline]
    #[must_use]
    pub fn improved_by(&self, price: Price) -> bool {
        self.price.is_none_or(|best| price < best)
    }
}

/// Price of serving `wings` as `split` plus `wings - split`
///
/// `None` if either half is infeasible or the sum overflows.
#[inline]
#[must_use]
pub fn split_price(prices: &[Option<Price>], wings: WingCount, split: WingCount) -> Option<Price> {
    let left = prices[split as usize]?;
    let right = prices[(wings - split) as usize]?;
    left.checked_add(right)
}

/// A strategy for evaluating every two-way split of a serving size
pub trait SplitSearch {
    /// Find the cheapest split of `wings`
    ///
    /// `prices` holds finalized prices for every size below `wings` and the
    /// menu-seeded price at `wings` itself. Candidate splits run from
    /// `min_wings` to `wings / 2` inclusive. A split only wins if it is
    /// strictly cheaper than the seed; among equally cheap splits the
    /// smallest one wins.
    fn best_split(
        &self,
        prices: &[Option<Price>],
        min_wings: WingCount,
        wings: WingCount,
    ) -> SplitOutcome;
}

/// Enum wrapper for all search types
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Plain ascending loop (default)
    Sequential(SequentialSearch),
    /// Rayon-parallel evaluation for sizes with many candidate splits
    Parallel(ParallelSearch),
}

impl Default for SearchType {
    fn default() -> Self {
        Self::Sequential(SequentialSearch)
    }
}

impl SplitSearch for SearchType {
    fn best_split(
        &self,
        prices: &[Option<Price>],
        min_wings: WingCount,
        wings: WingCount,
    ) -> SplitOutcome {
        match self {
            Self::Sequential(s) => s.best_split(prices, min_wings, wings),
            Self::Parallel(s) => s.best_split(prices, min_wings, wings),
        }
    }
}

impl SearchType {
    /// Create search type from name string
    ///
    /// Supported names: "sequential", "parallel".
    /// Defaults to sequential if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "parallel" | "par" => Self::Parallel(ParallelSearch::default()),
            _ => Self::Sequential(SequentialSearch),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sequential(_) => "sequential",
            Self::Parallel(_) => "parallel",
        }
    }
}

/// Checks every split in ascending order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialSearch;

impl SplitSearch for SequentialSearch {
    fn best_split(
        &self,
        prices: &[Option<Price>],
        min_wings: WingCount,
        wings: WingCount,
    ) -> SplitOutcome {
        let mut best = SplitOutcome::seed(prices[wings as usize]);

        for split in min_wings..=wings / 2 {
            let Some(price) = split_price(prices, wings, split) else {
                continue;
            };

            if best.improved_by(price) {
                best = SplitOutcome {
                    price: Some(price),
                    split,
                };
            }
        }

        best
    }
}

/// Evaluates splits on the rayon thread pool
///
/// Sizes with at most `threshold` candidate splits are handled by
/// [`SequentialSearch`], where spawning work costs more than it saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelSearch {
    pub threshold: usize,
}

impl ParallelSearch {
    pub const DEFAULT_THRESHOLD: usize = 4096;

    #[must_use]
    pub const fn with_threshold(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for ParallelSearch {
    fn default() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }
}

impl SplitSearch for ParallelSearch {
    fn best_split(
        &self,
        prices: &[Option<Price>],
        min_wings: WingCount,
        wings: WingCount,
    ) -> SplitOutcome {
        let half = wings / 2;
        let candidates = if half < min_wings {
            0
        } else {
            (half - min_wings) as usize + 1
        };

        if candidates <= self.threshold {
            return SequentialSearch.best_split(prices, min_wings, wings);
        }

        let seed = SplitOutcome::seed(prices[wings as usize]);

        // Lexicographic (price, split) minimum: the first split reaching the
        // cheapest price, same as the ascending loop.
        let cheapest = (min_wings..=half)
            .into_par_iter()
            .filter_map(|split| split_price(prices, wings, split).map(|price| (price, split)))
            .min();

        match cheapest {
            Some((price, split)) if seed.improved_by(price) => SplitOutcome {
                price: Some(price),
                split,
            },
            _ => seed,
        }
    }
}
