//! Shared networking defaults.

/// Default push-stream endpoint.
pub const DEFAULT_URL: &str = "ws://localhost:3000";
/// Default socket read timeout of the link I/O thread, in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 200;
