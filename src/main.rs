//! Wing Pricer - CLI
//!
//! Reads a menu of (wing count, price) pairs and prints the minimum price and
//! optimal partition for every serving size up to a maximum.
//!
//! ```bash
//! echo "3 9 5 13" | wing_pricer 12
//! wing_pricer 100 --menu menu.txt --search parallel --at-least 40
//! ```

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wing_pricer::{
    MenuError,
    commands::{PriceConfig, price_menu},
    core::{Menu, WingCount},
    menu::{load_from_file, read_menu},
    output::{print_cheapest, print_error, print_menu, print_summary, write_report},
    table::SearchType,
};

const MISSING_MAX_WINGS: &str = "Please specify the maximum serving size to calculate!";
const MALFORMED_MENU: &str = "An error occured while parsing the menu, please check the formatting \
                              (only whitespaces and integers are allowed)!";
const EMPTY_MENU: &str = "Error: The menu may not be empty!";

#[derive(Parser)]
#[command(
    name = "wing_pricer",
    about = "Minimum price and optimal partition for every serving size of wings",
    version,
    author
)]
struct Cli {
    /// Largest serving size to calculate
    max_wings: Option<WingCount>,

    /// Read the menu from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    menu: Option<PathBuf>,

    /// Split search: sequential (default) or parallel
    #[arg(
        short,
        long,
        default_value = "sequential",
        value_parser = ["sequential", "parallel"]
    )]
    search: String,

    /// Also print the cheapest order of at least this many wings
    #[arg(long, value_name = "WINGS")]
    at_least: Option<WingCount>,

    /// Do not echo the menu
    #[arg(short, long)]
    quiet: bool,

    /// Show a progress bar while building the table
    #[arg(long)]
    progress: bool,

    /// Debug logging and a summary after the report
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(max_wings) = cli.max_wings else {
        print_error(MISSING_MAX_WINGS);
        return Ok(());
    };

    let menu = match load_menu(cli.menu.as_deref()) {
        Ok(menu) => menu,
        Err(err) => return handle_menu_error(err),
    };

    if !cli.quiet {
        print_menu(&menu);
    }

    let config = PriceConfig::new(max_wings)
        .search(SearchType::from_name(&cli.search))
        .show_progress(cli.progress);
    let result = price_menu(&config, &menu);

    let mut out = BufWriter::new(io::stdout().lock());
    write_report(&mut out, result.table.rows())?;

    if let Some(wings) = cli.at_least {
        print_cheapest(wings, result.table.cheapest_at_least(wings).as_ref());
    }

    if cli.verbose {
        print_summary(&result);
    }

    Ok(())
}

/// Read the menu from `path`, or from stdin when no path is given
fn load_menu(path: Option<&Path>) -> Result<Menu, MenuError> {
    match path {
        Some(path) => load_from_file(path),
        None => read_menu(io::stdin().lock()),
    }
}

/// Malformed and empty menus end the run quietly; I/O failures are real errors
fn handle_menu_error(err: MenuError) -> Result<()> {
    match err {
        MenuError::Malformed { .. } => {
            print_error(MALFORMED_MENU);
            print_error(&err.to_string());
            Ok(())
        }
        MenuError::Empty => {
            print_error(EMPTY_MENU);
            Ok(())
        }
        MenuError::FileRead { .. } | MenuError::Io(_) => Err(err.into()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
