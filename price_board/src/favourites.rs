//! Favourite toggling.
//!
//! A toggle never edits the local catalog. It builds the full desired list
//! from the server-confirmed favourites and hands back a `setFavourites`
//! command; the catalog only changes when the server echoes the new list in a
//! `favouritesUpdated` (or a later `init`).
//!
//! Between the click and the echo the symbol is tracked as pending:
//!
//! ```text
//! Confirmed --toggle--> PendingAdd | PendingRemove --echo/init--> Confirmed
//! ```
use crate::model::SymbolCatalog;
use price_common::{Outbound, Symbol};
use std::collections::HashMap;

/// Per-symbol favourite round-trip state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteState {
    /// Local view agrees with the last server echo.
    Confirmed,
    /// Add requested, waiting for the echo.
    PendingAdd,
    /// Removal requested, waiting for the echo.
    PendingRemove,
}

/// Computes favourites commands and tracks unacknowledged toggles.
#[derive(Debug, Default)]
pub struct FavouritesController {
    pending: HashMap<Symbol, FavouriteState>,
}

impl FavouritesController {
    /// Create a controller with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next favourites list after toggling `symbol`.
    ///
    /// Removes it when present, otherwise appends it; the order of the other
    /// favourites is kept.
    pub fn next_favourites(current: &[Symbol], symbol: &Symbol) -> Vec<Symbol> {
        if current.contains(symbol) {
            current.iter().filter(|s| *s != symbol).cloned().collect()
        } else {
            let mut next = current.to_vec();
            next.push(symbol.clone());
            next
        }
    }

    /// Build the `setFavourites` command for a toggle and mark the symbol pending.
    ///
    /// Always computed from the confirmed list, so toggling twice before the
    /// echo sends the same list twice.
    pub fn toggle(&mut self, catalog: &SymbolCatalog, symbol: &Symbol) -> Outbound {
        let state = if catalog.is_favourite(symbol.as_str()) {
            FavouriteState::PendingRemove
        } else {
            FavouriteState::PendingAdd
        };
        self.pending.insert(symbol.clone(), state);
        Outbound::SetFavourites(Self::next_favourites(catalog.favourites(), symbol))
    }

    /// The server sent an authoritative favourites list; nothing is pending anymore.
    pub fn confirm(&mut self) {
        self.pending.clear();
    }

    /// Round-trip state of `symbol`.
    pub fn state_of(&self, symbol: &str) -> FavouriteState {
        self.pending
            .get(symbol)
            .copied()
            .unwrap_or(FavouriteState::Confirmed)
    }
}
