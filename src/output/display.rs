//! Diagnostic output on stderr

use super::formatters::{format_price, format_unit_price};
use crate::commands::PriceResult;
use crate::core::Menu;
use crate::table::TableRow;
use colored::Colorize;

/// Echo the menu before pricing it
pub fn print_menu(menu: &Menu) {
    eprintln!("{}", "Menu: ".bright_cyan().bold());
    for item in menu.items() {
        eprintln!("{item}");
    }
    eprintln!();
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}", message.red().bold());
}

/// Print table statistics after the report
pub fn print_summary(result: &PriceResult) {
    let table = &result.table;

    eprintln!("\n{}", "─".repeat(60).cyan());
    eprintln!(" {} ", "PRICE TABLE".bright_cyan().bold());
    eprintln!("{}", "─".repeat(60).cyan());

    if table.is_empty() {
        eprintln!(
            "   No sizes between {} and {} wings",
            table.min_wings(),
            table.max_wings()
        );
        return;
    }

    let feasible = table.feasible_count();
    eprintln!(
        "   Sizes priced:     {} ({}..={})",
        table.len(),
        table.min_wings(),
        table.max_wings()
    );
    eprintln!("   Feasible:         {}", feasible.to_string().green());
    eprintln!(
        "   Infeasible:       {}",
        (table.len() - feasible).to_string().yellow()
    );

    let best_value = table
        .rows()
        .filter_map(|row| row.price.map(|price| (row, price)))
        .filter(|(row, _)| row.wings > 0)
        .min_by(|(a, pa), (b, pb)| {
            // Compare pa / a.wings against pb / b.wings without division
            (u128::from(pa.value()) * u128::from(b.wings))
                .cmp(&(u128::from(pb.value()) * u128::from(a.wings)))
        });

    if let Some((row, price)) = best_value {
        eprintln!(
            "   Best per wing:    {} wings for {} ({} per wing)",
            row.wings,
            price,
            format_unit_price(price, row.wings).bright_yellow()
        );
    }

    eprintln!("   Search:           {}", result.search);
    eprintln!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
}

/// Print the cheapest way to get at least `wings` wings
pub fn print_cheapest(wings: u32, row: Option<&TableRow<'_>>) {
    match row {
        Some(row) => eprintln!(
            "{} {} wings for {} ({})",
            format!("Cheapest order of at least {wings} wings:").bright_cyan(),
            row.wings,
            format_price(row.price).bright_yellow().bold(),
            row.partition
        ),
        None => print_error(&format!(
            "No feasible order of at least {wings} wings within the table"
        )),
    }
}
