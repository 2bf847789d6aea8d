//! Menu loading utilities
//!
//! A menu is plain text: whitespace-separated integers read in pairs of
//! (wing count, price) until the end of input.

use crate::core::{Menu, MenuItem, WingCount};
use crate::error::MenuError;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse a menu from text
///
/// Any whitespace separates tokens, so pairs may be split across lines. A
/// trailing wing count without a price is dropped.
///
/// # Errors
///
/// Returns `MenuError::Malformed` for the first token that is not a
/// non-negative integer, and `MenuError::Empty` if no complete pair was read.
///
/// # Examples
/// ```
/// use wing_pricer::menu::parse_menu;
///
/// let menu = parse_menu("3 9\n5 13\n").unwrap();
/// assert_eq!(menu.len(), 2);
/// assert_eq!(menu.min_wings(), 3);
///
/// assert!(parse_menu("3 nine").is_err());
/// assert!(parse_menu("").is_err());
/// ```
pub fn parse_menu(text: &str) -> Result<Menu, MenuError> {
    let mut numbers = text
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| parse_token(token, index + 1));

    let mut items = Vec::new();

    while let Some(wings) = numbers.next() {
        let wings: WingCount = wings?;
        let Some(price) = numbers.next() else {
            tracing::warn!(wings, "ignoring wing count without a price at end of menu");
            break;
        };
        items.push(MenuItem::new(wings, price?));
    }

    tracing::debug!(items = items.len(), "menu parsed");

    Menu::new(items)
}

fn parse_token(token: &str, position: usize) -> Result<u32, MenuError> {
    token.parse().map_err(|_| MenuError::Malformed {
        token: token.to_string(),
        position,
    })
}

/// Read a menu from any reader, such as stdin
///
/// # Errors
///
/// Returns `MenuError::Io` if reading fails, otherwise as [`parse_menu`].
pub fn read_menu<R: Read>(mut reader: R) -> Result<Menu, MenuError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_menu(&text)
}

/// Load a menu from a file
///
/// # Errors
///
/// Returns `MenuError::FileRead` if the file cannot be read, otherwise as
/// [`parse_menu`].
///
/// # Examples
/// ```no_run
/// use wing_pricer::menu::load_from_file;
///
/// let menu = load_from_file("menu.txt").unwrap();
/// println!("Loaded {} menu items", menu.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Menu, MenuError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MenuError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_menu(&text)
}
