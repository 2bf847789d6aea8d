//! Minimum price table
//!
//! Bottom-up dynamic programming over serving sizes. Sizes are priced in
//! ascending order starting at the smallest menu item; each size is the
//! cheaper of its menu-seeded price and the best two-way split into already
//! priced smaller sizes. Once a size is priced it never changes.

mod partition;
pub mod search;

pub use partition::{Choice, Partition};
pub use search::{ParallelSearch, SearchType, SequentialSearch, SplitOutcome, SplitSearch};

use crate::core::{Menu, Price, WingCount};

/// One line of the price report
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    pub wings: WingCount,
    /// `None` if the size cannot be served exactly
    pub price: Option<Price>,
    pub partition: Partition<'a>,
}

/// Minimum price and optimal partition for every size up to a maximum
///
/// Both vectors are indexed by wing count. Entries below `min_wings` are never
/// computed and stay infeasible.
#[derive(Debug, Clone)]
pub struct PriceTable {
    min_wings: WingCount,
    max_wings: WingCount,
    prices: Vec<Option<Price>>,
    choices: Vec<Choice>,
}

impl PriceTable {
    /// Build the table with the default sequential split search
    ///
    /// # Examples
    /// ```
    /// use wing_pricer::core::{Menu, MenuItem, Price};
    /// use wing_pricer::table::PriceTable;
    ///
    /// let menu = Menu::new(vec![MenuItem::new(3, 9), MenuItem::new(5, 13)]).unwrap();
    /// let table = PriceTable::build(&menu, 12);
    ///
    /// assert_eq!(table.price(8), Some(Price::new(22)));
    /// assert_eq!(table.partition(8).unwrap().to_string(), "3, 5");
    /// assert_eq!(table.price(4), None);
    /// ```
    #[must_use]
    pub fn build(menu: &Menu, max_wings: WingCount) -> Self {
        Self::build_with(menu, max_wings, &SequentialSearch)
    }

    /// Build the table with the given split search
    #[must_use]
    pub fn build_with<S: SplitSearch + ?Sized>(
        menu: &Menu,
        max_wings: WingCount,
        search: &S,
    ) -> Self {
        Self::build_with_progress(menu, max_wings, search, |_| {})
    }

    /// Build the table, calling `on_priced` after each size is finalized
    pub fn build_with_progress<S, F>(
        menu: &Menu,
        max_wings: WingCount,
        search: &S,
        mut on_priced: F,
    ) -> Self
    where
        S: SplitSearch + ?Sized,
        F: FnMut(WingCount),
    {
        let min_wings = menu.min_wings();

        if max_wings < min_wings {
            tracing::debug!(min_wings, max_wings, "maximum below smallest menu item");
            return Self {
                min_wings,
                max_wings,
                prices: Vec::new(),
                choices: Vec::new(),
            };
        }

        let span = tracing::debug_span!("build_price_table", min_wings, max_wings);
        let _enter = span.enter();

        let mut table = Self::seeded(menu, max_wings);

        for wings in min_wings..=max_wings {
            let outcome = search.best_split(&table.prices, min_wings, wings);
            table.finalize(wings, outcome);
            on_priced(wings);
        }

        tracing::debug!(
            rows = table.len(),
            feasible = table.feasible_count(),
            "price table built"
        );

        table
    }

    /// Table with only menu prices filled in and nothing finalized
    fn seeded(menu: &Menu, max_wings: WingCount) -> Self {
        let size = max_wings as usize + 1;
        let mut prices = vec![None; size];

        // Items larger than the maximum cannot contribute to any size in range.
        for item in menu.items().iter().filter(|item| item.wings <= max_wings) {
            let seed = &mut prices[item.wings as usize];
            *seed = Some(seed.map_or(item.price, |price: Price| price.min(item.price)));
        }

        Self {
            min_wings: menu.min_wings(),
            max_wings,
            prices,
            choices: vec![Choice::Infeasible; size],
        }
    }

    fn finalize(&mut self, wings: WingCount, outcome: SplitOutcome) {
        let choice = match (outcome.price, outcome.split) {
            (None, _) => Choice::Infeasible,
            (Some(_), 0) => Choice::Direct,
            (Some(_), split) => Choice::Split(split),
        };

        tracing::trace!(wings, price = ?outcome.price, ?choice, "priced");

        self.prices[wings as usize] = outcome.price;
        self.choices[wings as usize] = choice;
    }

    /// Smallest computed size (the smallest menu wing count)
    #[inline]
    #[must_use]
    pub const fn min_wings(&self) -> WingCount {
        self.min_wings
    }

    /// Largest requested size
    #[inline]
    #[must_use]
    pub const fn max_wings(&self) -> WingCount {
        self.max_wings
    }

    /// Whether no size was computed
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.max_wings < self.min_wings
    }

    /// Number of computed sizes (rows)
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.max_wings - self.min_wings) as usize + 1
        }
    }

    /// Whether `wings` lies in the computed range
    #[inline]
    #[must_use]
    pub const fn contains(&self, wings: WingCount) -> bool {
        wings >= self.min_wings && wings <= self.max_wings
    }

    /// Minimum price for exactly `wings` wings
    ///
    /// `None` if the size is infeasible or outside the computed range.
    #[must_use]
    pub fn price(&self, wings: WingCount) -> Option<Price> {
        if self.contains(wings) {
            self.prices[wings as usize]
        } else {
            None
        }
    }

    /// Optimal partition of `wings`, `None` outside the computed range
    #[must_use]
    pub fn partition(&self, wings: WingCount) -> Option<Partition<'_>> {
        self.contains(wings).then(|| Partition::new(self, wings))
    }

    /// Report row for `wings`, `None` outside the computed range
    #[must_use]
    pub fn row(&self, wings: WingCount) -> Option<TableRow<'_>> {
        self.contains(wings).then(|| TableRow {
            wings,
            price: self.prices[wings as usize],
            partition: Partition::new(self, wings),
        })
    }

    /// All rows in ascending size order
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> + '_ {
        (self.min_wings..=self.max_wings).filter_map(move |wings| self.row(wings))
    }

    /// Number of sizes that can be served exactly
    #[must_use]
    pub fn feasible_count(&self) -> usize {
        self.rows().filter(|row| row.price.is_some()).count()
    }

    /// Cheapest feasible row serving at least `wings` wings
    ///
    /// Only sizes within the table are considered; ties go to the smaller size.
    ///
    /// # Examples
    /// ```
    /// use wing_pricer::core::{Menu, MenuItem, Price};
    /// use wing_pricer::table::PriceTable;
    ///
    /// let menu = Menu::new(vec![MenuItem::new(3, 9), MenuItem::new(5, 13)]).unwrap();
    /// let table = PriceTable::build(&menu, 12);
    ///
    /// let row = table.cheapest_at_least(4).unwrap();
    /// assert_eq!(row.wings, 5);
    /// assert_eq!(row.price, Some(Price::new(13)));
    /// ```
    #[must_use]
    pub fn cheapest_at_least(&self, wings: WingCount) -> Option<TableRow<'_>> {
        self.rows()
            .filter(|row| row.wings >= wings)
            .filter_map(|row| row.price.map(|price| (price, row)))
            .min_by_key(|(price, row)| (*price, row.wings))
            .map(|(_, row)| row)
    }

    pub(crate) fn choice(&self, wings: WingCount) -> Choice {
        self.choices
            .get(wings as usize)
            .copied()
            .unwrap_or_default()
    }
}
