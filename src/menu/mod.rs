//! Menu input
//!
//! Reads menus from text, readers (stdin) or files.

pub mod reader;

pub use reader::{load_from_file, parse_menu, read_menu};
