//! Menu pricing command
//!
//! Builds the price table for a menu and reports how long it took.

use crate::core::{Menu, WingCount};
use crate::table::{PriceTable, SearchType};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for pricing a menu
#[derive(Debug, Clone, Copy)]
pub struct PriceConfig {
    pub max_wings: WingCount,
    pub search: SearchType,
    pub show_progress: bool,
}

impl PriceConfig {
    #[must_use]
    pub fn new(max_wings: WingCount) -> Self {
        Self {
            max_wings,
            search: SearchType::default(),
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn search(mut self, search: SearchType) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// Result of pricing a menu
#[derive(Debug)]
pub struct PriceResult {
    pub table: PriceTable,
    pub search: &'static str,
    pub duration: Duration,
}

/// Build the price table for `menu`
///
/// With `show_progress`, a progress bar on stderr tracks the sizes priced so far.
///
/// # Examples
/// ```
/// use wing_pricer::commands::{PriceConfig, price_menu};
/// use wing_pricer::menu::parse_menu;
///
/// let menu = parse_menu("3 9 5 13").unwrap();
/// let result = price_menu(&PriceConfig::new(12), &menu);
///
/// assert_eq!(result.table.len(), 10);
/// assert_eq!(result.search, "sequential");
/// ```
#[must_use]
pub fn price_menu(config: &PriceConfig, menu: &Menu) -> PriceResult {
    let start = Instant::now();

    let table = if config.show_progress {
        let pb = progress_bar(menu, config.max_wings);
        let table = PriceTable::build_with_progress(menu, config.max_wings, &config.search, |_| {
            pb.inc(1);
        });
        pb.finish_and_clear();
        table
    } else {
        PriceTable::build_with(menu, config.max_wings, &config.search)
    };

    let duration = start.elapsed();
    tracing::debug!(
        search = config.search.name(),
        elapsed_ms = duration.as_millis(),
        "menu priced"
    );

    PriceResult {
        table,
        search: config.search.name(),
        duration,
    }
}

fn progress_bar(menu: &Menu, max_wings: WingCount) -> ProgressBar {
    let sizes = u64::from(max_wings.saturating_sub(menu.min_wings())) + 1;
    let pb = ProgressBar::new(sizes);

    // The template is a constant; fall back to the default style if it is ever rejected.
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} sizes ({percent}%) | {eta}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    pb.set_style(style);

    pb
}
