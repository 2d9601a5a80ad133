//! Text rendering of the board.
//!
//! Rows carry everything a front end needs (symbol, price text, change icon,
//! favourite star); `board_text` lays them out for the terminal host.
use crate::favourites::{FavouriteState, FavouritesController};
use crate::icon::{DiffIcon, icon_for};
use crate::model::{PriceStore, SymbolCatalog};
use chrono::{DateTime, Utc};
use price_common::Symbol;
use std::fmt::Write;

/// Board title.
pub const TITLE: &str = "WELCOME TO CRYPTO-SITE!";
/// Shown instead of the table when no row is visible.
pub const NO_DATA: &str = "NO DATA AVAILABLE";

/// One displayed row.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    /// Ticker.
    pub symbol: Symbol,
    /// Price text without the dollar sign, see [`format_usd`].
    pub price: String,
    /// Change icon and its color.
    pub change: DiffIcon,
    /// Confirmed favourite.
    pub favourite: bool,
    /// Toggle sent, echo not yet received.
    pub pending: bool,
}

impl BoardRow {
    /// Price text as shown: `$30250.123456`, or `$0` when unknown.
    pub fn price_text(&self) -> String {
        format!("${}", self.price)
    }

    fn star(&self) -> &'static str {
        match (self.favourite, self.pending) {
            (true, false) => "★",
            (false, false) => "☆",
            (true, true) => "★~",
            (false, true) => "☆~",
        }
    }
}

/// Format a USD price with exactly six fractional digits; unknown is `0`.
pub fn format_usd(price: Option<f64>) -> String {
    match price {
        Some(usd) => format!("{:.6}", usd),
        None => "0".to_string(),
    }
}

/// Build display rows for `visible`.
pub fn rows(
    visible: &[Symbol],
    catalog: &SymbolCatalog,
    prices: &PriceStore,
    favourites: &FavouritesController,
) -> Vec<BoardRow> {
    visible
        .iter()
        .map(|symbol| BoardRow {
            symbol: symbol.clone(),
            price: format_usd(prices.usd(symbol.as_str())),
            change: icon_for(prices.diff(symbol.as_str())),
            favourite: catalog.is_favourite(symbol.as_str()),
            pending: favourites.state_of(symbol.as_str()) != FavouriteState::Confirmed,
        })
        .collect()
}

/// Lay the board out as text.
///
/// `total` is the length of the list before the display cap; when rows were
/// cut off the header says how many.
pub fn board_text(
    search_term: &str,
    rows: &[BoardRow],
    total: usize,
    updated_at: Option<DateTime<Utc>>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "SEARCH: {}", search_term);
    if let Some(at) = updated_at {
        let _ = writeln!(out, "prices as of {}", at.format("%H:%M:%S UTC"));
    }
    if total > rows.len() {
        let _ = writeln!(out, "showing {} of {}", rows.len(), total);
    }
    if rows.is_empty() {
        let _ = writeln!(out, "{}", NO_DATA);
        return out;
    }
    let _ = writeln!(out, "{:<12} {:>22}", "NAME", "PRICE");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<12} {:>22} {} {:<5} {}",
            row.symbol,
            row.price_text(),
            row.change.icon.glyph(),
            row.change.color,
            row.star()
        );
    }
    out
}
