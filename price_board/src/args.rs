//! Command-line arguments for the price board.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use price_common::net::{DEFAULT_READ_TIMEOUT_MS, DEFAULT_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Websocket endpoint of the price server (plain `ws://` only).
    #[clap(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Socket read timeout of the link thread, in milliseconds.
    /// Bounds how long an outbound favourites command may wait to be written.
    #[clap(long, default_value_t = DEFAULT_READ_TIMEOUT_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub read_timeout_ms: u64,
}
