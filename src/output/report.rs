//! Tab-separated price report

use super::formatters::format_price;
use crate::table::TableRow;
use std::io::{self, Write};

/// First line of every report
pub const HEADER: &str = "number of wings\tminimum price\toptimal partition\n";

/// Write one report line: size, minimum price (or `-`), partition
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_row<W: Write>(out: &mut W, row: &TableRow<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}",
        row.wings,
        format_price(row.price),
        row.partition
    )
}

/// Write the header followed by one line per row
///
/// # Errors
///
/// Returns any error from the underlying writer.
///
/// # Examples
/// ```
/// use wing_pricer::core::{Menu, MenuItem};
/// use wing_pricer::output::write_report;
/// use wing_pricer::table::PriceTable;
///
/// let menu = Menu::new(vec![MenuItem::new(3, 9), MenuItem::new(5, 13)]).unwrap();
/// let table = PriceTable::build(&menu, 5);
///
/// let mut out = Vec::new();
/// write_report(&mut out, table.rows()).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "number of wings\tminimum price\toptimal partition\n3\t9\t3\n4\t-\t-\n5\t13\t5\n"
/// );
/// ```
pub fn write_report<'a, W, I>(out: &mut W, rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = TableRow<'a>>,
{
    out.write_all(HEADER.as_bytes())?;
    for row in rows {
        write_row(out, &row)?;
    }
    out.flush()
}
