//! Command line and environment configuration.

use clap::Parser;
use url::Url;

use crate::error::{Error, Result};
use crate::format::MessageFormat;

/// Connect to a WebSocket endpoint, log what arrives, send what you type.
#[derive(Debug, Clone, Parser)]
#[command(name = "wslog", version)]
pub struct Config {
    /// WebSocket endpoint, e.g. ws://127.0.0.1:8080/
    #[arg(env = "WSLOG_URL")]
    pub url: String,

    /// How inbound messages are rendered
    #[arg(long, value_enum, env = "WSLOG_FORMAT", default_value_t = MessageFormat::Raw)]
    pub format: MessageFormat,
}

impl Config {
    pub fn new(url: impl Into<String>, format: MessageFormat) -> Self {
        Config { url: url.into(), format }
    }

    /// Parses and checks the endpoint. Only `ws` and `wss` are accepted.
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.url)?;
        match url.scheme() {
            "ws" | "wss" => Ok(url),
            other => Err(Error::Scheme(other.to_owned())),
        }
    }
}
