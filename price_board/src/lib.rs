//! Live price board engine.
//!
//! Mirrors a server-pushed symbol catalog, prices and favourites, and projects
//! them into the ordered, capped list of rows to display:
//! - `model` — catalog and price store mirrors.
//! - `favourites` — toggle commands and pending round-trips.
//! - `projector` — search/sort projection.
//! - `icon` — diff-to-icon mapping.
//! - `render` — row and board formatting.
//! - `connection` — `ConnectionManager`, the single writer of board state.
//! - `link` — websocket transport thread.
//! - `input` — stdin command parsing for the host shell.
#![warn(missing_docs)]
pub mod connection;
pub mod favourites;
pub mod icon;
pub mod input;
pub mod link;
pub mod model;
pub mod projector;
pub mod render;

pub use connection::{ConnectionManager, FrameOutcome, Transport};
pub use projector::{SortCommand, SortDirection, SortField, project};
