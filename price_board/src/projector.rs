//! Projection of the mirrored state into the ordered list of rows to display.
//!
//! The list always starts with the favourites, followed by the non-favourite
//! symbols taken from the first [`SEARCH_WINDOW`] entries of the catalog.
//! Symbols past that window are never shown and never matched by search.
//! Only the first [`DISPLAY_LIMIT`] entries of the result are displayed.
//!
//! Two triggers recompute the list:
//! - search mode, on any change of the search term or of the favourites:
//!   both parts are filtered by a case-insensitive substring match;
//! - an explicit sort command: both parts are sorted independently and the
//!   search term is ignored until the next search-mode trigger.
use crate::model::{PriceStore, SymbolCatalog};
use price_common::Symbol;
use std::cmp::Ordering;
use std::collections::HashSet;
use strum_macros::{Display, EnumString};

/// Maximum number of rows displayed.
pub const DISPLAY_LIMIT: usize = 50;
/// Number of leading catalog entries eligible as non-favourite rows.
pub const SEARCH_WINDOW: usize = 50;

/// Column a sort command orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum SortField {
    /// Lexicographic symbol order.
    Name,
    /// USD price; unknown prices compare as `0`.
    Price,
}

/// Direction of a sort command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

/// A click on one of the sort arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCommand {
    /// Column to order by.
    pub field: SortField,
    /// Ascending or descending.
    pub direction: SortDirection,
}

impl SortCommand {
    /// Create a sort command.
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &Symbol, b: &Symbol, prices: &PriceStore) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a.cmp(b),
            SortField::Price => prices
                .usd_or_zero(a.as_str())
                .total_cmp(&prices.usd_or_zero(b.as_str())),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Sorted copy of `symbols`; equal keys keep their input order.
    pub fn sorted(&self, symbols: &[Symbol], prices: &PriceStore) -> Vec<Symbol> {
        let mut sorted = symbols.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b, prices));
        sorted
    }
}

/// Which trigger produced the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Filtered by the search term, server order.
    Search,
    /// Ordered by an explicit sort command, search term ignored.
    Sorted(SortCommand),
}

/// Non-favourite symbols inside the search window, in catalog order.
fn non_favourites(catalog: &SymbolCatalog) -> Vec<Symbol> {
    let favourites: HashSet<&str> = catalog.favourites().iter().map(Symbol::as_str).collect();
    catalog
        .all_symbols()
        .iter()
        .take(SEARCH_WINDOW)
        .filter(|s| !favourites.contains(s.as_str()))
        .cloned()
        .collect()
}

/// Full visible list for a state snapshot, before the display cap.
pub fn project(
    catalog: &SymbolCatalog,
    prices: &PriceStore,
    search_term: &str,
    mode: ViewMode,
) -> Vec<Symbol> {
    match mode {
        ViewMode::Search => catalog
            .favourites()
            .iter()
            .cloned()
            .chain(non_favourites(catalog))
            .filter(|s| s.contains_ignore_case(search_term))
            .collect(),
        ViewMode::Sorted(command) => {
            let mut visible = command.sorted(catalog.favourites(), prices);
            visible.extend(command.sorted(&non_favourites(catalog), prices));
            visible
        }
    }
}

/// Stateful view: search term, last trigger and the resulting list.
#[derive(Debug, Clone)]
pub struct ViewProjector {
    search_term: String,
    mode: ViewMode,
    visible: Vec<Symbol>,
}

impl Default for ViewProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewProjector {
    /// Empty view in search mode.
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            mode: ViewMode::Search,
            visible: Vec::new(),
        }
    }

    /// The user edited the search box.
    pub fn set_search_term(
        &mut self,
        term: &str,
        catalog: &SymbolCatalog,
        prices: &PriceStore,
    ) {
        self.search_term = term.to_string();
        self.mode = ViewMode::Search;
        self.recompute(catalog, prices);
    }

    /// The user clicked a sort arrow.
    pub fn sort(&mut self, command: SortCommand, catalog: &SymbolCatalog, prices: &PriceStore) {
        self.mode = ViewMode::Sorted(command);
        self.recompute(catalog, prices);
    }

    /// The confirmed favourites were replaced (`init` or `favouritesUpdated`).
    pub fn favourites_changed(&mut self, catalog: &SymbolCatalog, prices: &PriceStore) {
        self.mode = ViewMode::Search;
        self.recompute(catalog, prices);
    }

    fn recompute(&mut self, catalog: &SymbolCatalog, prices: &PriceStore) {
        self.visible = project(catalog, prices, &self.search_term, self.mode);
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Trigger that produced the current list.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Rows to display, capped at [`DISPLAY_LIMIT`].
    pub fn visible(&self) -> &[Symbol] {
        &self.visible[..self.visible.len().min(DISPLAY_LIMIT)]
    }

    /// Length of the list before the display cap.
    pub fn full_len(&self) -> usize {
        self.visible.len()
    }
}
