//! Latest prices and move directions received from the server.
//!
//! The store is a pure replace-on-update mirror: every `prices` envelope
//! swaps both maps wholesale, so a symbol missing from the latest envelope
//! reverts to "unknown" (no price, no diff).
use chrono::{DateTime, Utc};
use price_common::protocol::PricesData;
use price_common::{DiffState, Symbol};
use std::collections::HashMap;

/// Price and diff maps of the current connection.
#[derive(Debug, Default, Clone)]
pub struct PriceStore {
    /// Latest USD price per symbol.
    prices: HashMap<Symbol, f64>,
    /// Latest move direction per symbol.
    diffs: HashMap<Symbol, DiffState>,
    /// Wall-clock time the maps were last replaced.
    updated_at: Option<DateTime<Utc>>,
}

impl PriceStore {
    /// Create an empty store; every symbol starts unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both maps with the content of a `prices` envelope.
    ///
    /// A record without a USD value leaves that symbol unknown.
    pub fn replace(&mut self, data: PricesData, at: DateTime<Utc>) {
        self.prices = data
            .prices
            .into_iter()
            .filter_map(|(symbol, price)| price.usd.map(|usd| (symbol, usd)))
            .collect();
        self.diffs = data.diffs;
        self.updated_at = Some(at);
    }

    /// Latest USD price, `None` when unknown.
    pub fn usd(&self, symbol: &str) -> Option<f64> {
        self.prices.get(symbol).copied()
    }

    /// Price used for sorting: unknown prices compare as `0`.
    pub fn usd_or_zero(&self, symbol: &str) -> f64 {
        self.usd(symbol).unwrap_or(0.0)
    }

    /// Latest move direction, `None` when the server sent none.
    pub fn diff(&self, symbol: &str) -> Option<DiffState> {
        self.diffs.get(symbol).copied()
    }

    /// When the last `prices` envelope was applied.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
