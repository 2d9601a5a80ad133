//! Error types shared across the workspace.
//!
//! The `BoardError` enum unifies the failure cases of the price board: I/O,
//! frame decoding, websocket transport, channel communication and user input,
//! allowing crates to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the board engine and the host shell.
#[derive(Error, Debug)]
pub enum BoardError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An inbound frame could not be decoded into a known envelope.
    ///
    /// The frame is dropped as a whole; no part of it is applied.
    #[error("Malformed frame: {0}")]
    Decode(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The websocket transport failed (handshake, read or write).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The push-stream connection is already closed.
    #[error("Connection closed")]
    ConnectionClosed,

    /// Crossbeam/channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Installing the Ctrl+C handler failed.
    #[error("Signal handler error: {0}")]
    Signal(String),

    /// A line typed by the user is not a known board command.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
