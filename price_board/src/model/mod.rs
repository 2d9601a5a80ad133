//! State mirrored from the price server.
//!
//! - `catalog` — symbol universe and confirmed favourites.
//! - `price_store` — latest prices and move directions.
pub mod catalog;
pub mod price_store;

pub use catalog::SymbolCatalog;
pub use price_store::PriceStore;
