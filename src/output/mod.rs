//! Report and diagnostic output
//!
//! The tab-separated report goes to any writer (stdout in the CLI); menu
//! echo, errors and summaries go to stderr.

pub mod display;
pub mod formatters;
pub mod report;

pub use display::{print_cheapest, print_error, print_menu, print_summary};
pub use report::{HEADER, write_report, write_row};
