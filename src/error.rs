//! Error type shared by the client library and the binary.

use thiserror::Error;

/// Possible failures while configuring or running a chat session.
#[derive(Debug, Error)]
pub enum Error {
    /// The WebSocket layer failed: handshake, framing or transport.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),
    /// Reading input or writing the transcript failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// An inbound payload was not the expected `{"hms", "text"}` object.
    #[error("malformed inbound message: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured endpoint could not be parsed.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    /// The endpoint parsed but is not a WebSocket URL.
    #[error("unsupported url scheme `{0}`, expected ws or wss")]
    Scheme(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
