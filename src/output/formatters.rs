//! Formatting utilities for report cells

use crate::core::Price;

/// Marker printed in place of a price for sizes that cannot be served
pub const NO_PRICE: &str = "-";

/// Format a minimum price, `-` if the size is infeasible
#[must_use]
pub fn format_price(price: Option<Price>) -> String {
    price.map_or_else(|| NO_PRICE.to_string(), |price| price.to_string())
}

/// Format a price per wing with two decimals
#[must_use]
pub fn format_unit_price(price: Price, wings: u32) -> String {
    if wings == 0 {
        return NO_PRICE.to_string();
    }
    // Cast is fine: prices and counts are far below f64's exact integer range
    #[allow(clippy::cast_precision_loss)]
    let per_wing = price.value() as f64 / f64::from(wings);
    format!("{per_wing:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_feasible() {
        assert_eq!(format_price(Some(Price::new(22))), "22");
        assert_eq!(format_price(Some(Price::ZERO)), "0");
    }

    #[test]
    fn format_price_infeasible() {
        assert_eq!(format_price(None), "-");
    }

    #[test]
    fn format_unit_price_two_decimals() {
        assert_eq!(format_unit_price(Price::new(13), 5), "2.60");
        assert_eq!(format_unit_price(Price::new(9), 3), "3.00");
    }

    #[test]
    fn format_unit_price_zero_wings() {
        assert_eq!(format_unit_price(Price::ZERO, 0), "-");
    }
}
