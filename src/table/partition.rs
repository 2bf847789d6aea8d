//! Optimal partitions
//!
//! A partition is never stored as text. Each size records only how it was
//! priced (`Choice`); the comma-separated rendering is rebuilt on demand by
//! walking those choices, which yields the same text as concatenating the two
//! halves' descriptions.

use super::PriceTable;
use crate::core::WingCount;
use std::fmt;

/// How a serving size reached its minimum price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    /// No combination of menu items serves this size exactly
    #[default]
    Infeasible,
    /// Served by a single menu item of this exact size
    Direct,
    /// Served as `split` wings plus the remaining wings
    Split(WingCount),
}

/// The optimal partition of one serving size
#[derive(Clone, Copy)]
pub struct Partition<'a> {
    table: &'a PriceTable,
    wings: WingCount,
}

impl<'a> Partition<'a> {
    pub(super) const fn new(table: &'a PriceTable, wings: WingCount) -> Self {
        Self { table, wings }
    }

    /// Serving size this partition describes
    #[inline]
    #[must_use]
    pub const fn wings(&self) -> WingCount {
        self.wings
    }

    /// How this size was priced
    #[inline]
    #[must_use]
    pub fn choice(&self) -> Choice {
        self.table.choice(self.wings)
    }

    #[inline]
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.choice() != Choice::Infeasible
    }

    /// Menu wing counts making up this serving, in rendering order
    ///
    /// Empty for an infeasible size.
    ///
    /// # Examples
    /// ```
    /// use wing_pricer::core::{Menu, MenuItem};
    /// use wing_pricer::table::PriceTable;
    ///
    /// let menu = Menu::new(vec![MenuItem::new(3, 9), MenuItem::new(5, 13)]).unwrap();
    /// let table = PriceTable::build(&menu, 11);
    ///
    /// assert_eq!(table.partition(11).unwrap().items(), vec![3, 3, 5]);
    /// assert!(table.partition(4).unwrap().items().is_empty());
    /// ```
    #[must_use]
    pub fn items(&self) -> Vec<WingCount> {
        let mut items = Vec::new();

        if !self.is_feasible() {
            return items;
        }

        // Explicit stack: chains of splits can be as deep as the size itself.
        let mut pending = vec![self.wings];
        while let Some(wings) = pending.pop() {
            match self.table.choice(wings) {
                Choice::Split(split) => {
                    pending.push(wings - split);
                    pending.push(split);
                }
                Choice::Direct => items.push(wings),
                Choice::Infeasible => {}
            }
        }

        items
    }
}

impl fmt::Display for Partition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_feasible() {
            return f.write_str("-");
        }

        for (i, wings) in self.items().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{wings}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Partition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("wings", &self.wings)
            .field("choice", &self.choice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Menu, MenuItem};
    use crate::table::PriceTable;

    use super::*;

    fn three_five_table(max: WingCount) -> PriceTable {
        let menu = Menu::new(vec![MenuItem::new(3, 9), MenuItem::new(5, 13)]).unwrap();
        PriceTable::build(&menu, max)
    }

    #[test]
    fn direct_partition_is_the_size() {
        let table = three_five_table(12);
        let partition = table.partition(5).unwrap();

        assert_eq!(partition.choice(), Choice::Direct);
        assert_eq!(partition.to_string(), "5");
        assert_eq!(partition.items(), vec![5]);
    }

    #[test]
    fn infeasible_partition_is_dash() {
        let table = three_five_table(12);
        let partition = table.partition(7).unwrap();

        assert!(!partition.is_feasible());
        assert_eq!(partition.to_string(), "-");
    }

    #[test]
    fn split_partition_concatenates_halves() {
        let table = three_five_table(12);

        for wings in table.min_wings()..=table.max_wings() {
            let partition = table.partition(wings).unwrap();
            if let Choice::Split(split) = partition.choice() {
                let expected = format!(
                    "{}, {}",
                    table.partition(split).unwrap(),
                    table.partition(wings - split).unwrap()
                );
                assert_eq!(partition.to_string(), expected, "size {wings}");
            }
        }
    }

    #[test]
    fn partition_items_sum_to_size() {
        let table = three_five_table(40);

        for row in table.rows() {
            let items = row.partition.items();
            if row.price.is_some() {
                assert_eq!(items.iter().sum::<WingCount>(), row.wings);
            } else {
                assert!(items.is_empty());
            }
        }
    }

    #[test]
    fn deep_partition_does_not_recurse() {
        let menu = Menu::new(vec![MenuItem::new(1, 1)]).unwrap();
        let table = PriceTable::build(&menu, 20_000);
        let partition = table.partition(20_000).unwrap();

        assert_eq!(partition.items().len(), 20_000);
    }
}
