//! Core domain types for menu pricing
//!
//! Plain value types with no I/O: wing counts, prices and the menu itself.

mod menu;
mod price;

pub use menu::{Menu, MenuItem};
pub use price::{Price, WingCount};
