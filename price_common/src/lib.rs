//!
//! Common types and utilities shared by the price board and its tests.
//!
//! This crate aggregates:
//! - `error` — unified error type `BoardError` used across the workspace.
//! - `result` — handy `Result<T, BoardError>` alias.
//! - `symbol` — the opaque `Symbol` ticker type.
//! - `protocol` — inbound/outbound JSON envelopes exchanged with the price server.
//! - `net` — networking defaults and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod protocol;
pub mod result;
pub mod symbol;

pub use error::BoardError;
pub use protocol::{DiffState, Inbound, Outbound};
pub use result::Result;
pub use symbol::Symbol;
