//! Symbol universe and confirmed favourites.
//!
//! Both lists are replaced wholesale by inbound envelopes; nothing local ever
//! edits them. Favourites are not checked against `all_symbols`: a favourite
//! the server no longer lists is kept and shown like any other.
use price_common::Symbol;
use price_common::protocol::InitData;

/// Catalog mirror of the current connection.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SymbolCatalog {
    all_symbols: Vec<Symbol>,
    favourites: Vec<Symbol>,
}

impl SymbolCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog directly from lists, mainly for projections in tests.
    pub fn with(all_symbols: Vec<Symbol>, favourites: Vec<Symbol>) -> Self {
        Self {
            all_symbols,
            favourites,
        }
    }

    /// Apply an `init` envelope.
    pub fn replace_all(&mut self, init: InitData) {
        self.all_symbols = init.all_symbols;
        self.favourites = init.favourites;
    }

    /// Apply a `favouritesUpdated` envelope.
    pub fn replace_favourites(&mut self, favourites: Vec<Symbol>) {
        self.favourites = favourites;
    }

    /// Every known symbol in server order.
    pub fn all_symbols(&self) -> &[Symbol] {
        &self.all_symbols
    }

    /// Confirmed favourites in server order.
    pub fn favourites(&self) -> &[Symbol] {
        &self.favourites
    }

    /// Whether `symbol` is a confirmed favourite.
    pub fn is_favourite(&self, symbol: &str) -> bool {
        self.favourites.iter().any(|f| f.as_str() == symbol)
    }
}
