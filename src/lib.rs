//! Wing Pricer
//!
//! Finds the cheapest way to order every serving size of chicken wings up to a
//! maximum, given a menu of (wing count, price) offers.
//!
//! # Quick Start
//!
//! ```rust
//! use wing_pricer::menu::parse_menu;
//! use wing_pricer::table::PriceTable;
//!
//! let menu = parse_menu("3 9\n5 13\n").unwrap();
//! let table = PriceTable::build(&menu, 12);
//!
//! for row in table.rows() {
//!     println!("{} wings: {:?} ({})", row.wings, row.price, row.partition);
//! }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Menu input
pub mod menu;

// Minimum price table
pub mod table;

// Command implementations
pub mod commands;

// Report and terminal output
pub mod output;

pub use error::MenuError;
