//! Command implementations

pub mod price;

pub use price::{PriceConfig, PriceResult, price_menu};
