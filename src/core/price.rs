//! Price representation
//!
//! A `Price` is always a real, attainable amount. "No way to serve this many
//! wings" is expressed as `Option<Price>::None` rather than a sentinel value,
//! so adding two prices can never wrap around into something that looks cheap.

use std::fmt;

/// Number of wings in a serving
pub type WingCount = u32;

/// Total price of one or more menu items
///
/// Menu prices are read as `u32`; sums are widened to `u64` and combined with
/// checked addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    /// A free serving
    pub const ZERO: Self = Self(0);

    /// Create a price from a raw amount
    #[inline]
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the raw amount
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Add two prices, returning `None` on overflow
    ///
    /// # Examples
    /// ```
    /// use wing_pricer::core::Price;
    ///
    /// assert_eq!(Price::new(9).checked_add(Price::new(13)), Some(Price::new(22)));
    /// assert_eq!(Price::new(u64::MAX).checked_add(Price::new(1)), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(u64::from(amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
