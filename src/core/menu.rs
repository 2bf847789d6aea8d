//! Menu representation
//!
//! A menu is a non-empty list of (wing count, price) offers. The same wing
//! count may appear more than once; only the cheapest offer for a count matters.

use super::{Price, WingCount};
use crate::error::MenuError;
use rustc_hash::FxHashMap;
use std::fmt;

/// A single menu offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuItem {
    pub wings: WingCount,
    pub price: Price,
}

impl MenuItem {
    #[inline]
    #[must_use]
    pub fn new(wings: WingCount, price: u32) -> Self {
        Self {
            wings,
            price: Price::from(price),
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wings \t{}", self.wings, self.price)
    }
}

/// A non-empty menu
///
/// Items keep their input order. The smallest and largest wing counts are
/// computed once on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
    min_wings: WingCount,
    max_wings: WingCount,
}

impl Menu {
    /// Create a menu from a list of items
    ///
    /// # Errors
    /// Returns `MenuError::Empty` if `items` is empty.
    ///
    /// # Examples
    /// ```
    /// use wing_pricer::core::{Menu, MenuItem};
    ///
    /// let menu = Menu::new(vec![MenuItem::new(5, 13), MenuItem::new(3, 9)]).unwrap();
    /// assert_eq!(menu.min_wings(), 3);
    /// assert_eq!(menu.max_wings(), 5);
    ///
    /// assert!(Menu::new(Vec::new()).is_err());
    /// ```
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        let min_wings = items
            .iter()
            .map(|item| item.wings)
            .min()
            .ok_or(MenuError::Empty)?;
        let max_wings = items.iter().map(|item| item.wings).max().unwrap_or(min_wings);

        Ok(Self {
            items,
            min_wings,
            max_wings,
        })
    }

    /// All items in input order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a menu cannot be constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Smallest wing count on the menu
    #[inline]
    #[must_use]
    pub const fn min_wings(&self) -> WingCount {
        self.min_wings
    }

    /// Largest wing count on the menu
    #[inline]
    #[must_use]
    pub const fn max_wings(&self) -> WingCount {
        self.max_wings
    }

    /// Cheapest listed price for each distinct wing count
    #[must_use]
    pub fn cheapest_prices(&self) -> FxHashMap<WingCount, Price> {
        let mut cheapest: FxHashMap<WingCount, Price> = FxHashMap::default();
        for item in &self.items {
            cheapest
                .entry(item.wings)
                .and_modify(|price| *price = (*price).min(item.price))
                .or_insert(item.price);
        }
        cheapest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_rejects_empty() {
        assert!(matches!(Menu::new(Vec::new()), Err(MenuError::Empty)));
    }

    #[test]
    fn menu_keeps_input_order() {
        let menu = Menu::new(vec![MenuItem::new(5, 13), MenuItem::new(3, 9)]).unwrap();
        assert_eq!(menu.len(), 2);
        assert!(!menu.is_empty());
        assert_eq!(menu.items()[0], MenuItem::new(5, 13));
        assert_eq!(menu.items()[1], MenuItem::new(3, 9));
    }

    #[test]
    fn menu_min_and_max_wings() {
        let menu = Menu::new(vec![
            MenuItem::new(6, 15),
            MenuItem::new(4, 12),
            MenuItem::new(10, 20),
        ])
        .unwrap();
        assert_eq!(menu.min_wings(), 4);
        assert_eq!(menu.max_wings(), 10);
    }

    #[test]
    fn single_item_menu() {
        let menu = Menu::new(vec![MenuItem::new(3, 9)]).unwrap();
        assert_eq!(menu.min_wings(), 3);
        assert_eq!(menu.max_wings(), 3);
    }

    #[test]
    fn cheapest_prices_takes_minimum_of_duplicates() {
        let menu = Menu::new(vec![
            MenuItem::new(3, 9),
            MenuItem::new(3, 7),
            MenuItem::new(5, 13),
            MenuItem::new(3, 8),
        ])
        .unwrap();
        let cheapest = menu.cheapest_prices();

        assert_eq!(cheapest.len(), 2);
        assert_eq!(cheapest.get(&3), Some(&Price::new(7)));
        assert_eq!(cheapest.get(&5), Some(&Price::new(13)));
    }

    #[test]
    fn menu_item_display() {
        assert_eq!(MenuItem::new(3, 9).to_string(), "3 wings \t9");
    }
}
