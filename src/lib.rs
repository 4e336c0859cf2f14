//! Terminal WebSocket chat client.
//!
//! The client opens one WebSocket connection, appends a line to its log for
//! the open event and for every inbound message, and sends whatever the user
//! types when Enter is pressed. Inbound messages are logged either verbatim
//! or, in stamped mode, decoded from `{"hms": .., "text": ..}` and logged as
//! `[hms] text`.
//!
//! There is no reconnection and no outgoing queue: the log simply stops
//! growing when the connection goes away.

pub use tungstenite;

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod session;
pub mod transcript;

use futures_util::stream::Stream;
use log::*;
use tokio::io::AsyncWrite;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub use config::Config;
pub use error::{Error, Result};
pub use format::MessageFormat;
pub use input::{InputField, Key, ENTER_KEY_CODE};
pub use session::Session;
pub use transcript::{Transcript, CONNECTION_OPENED};

/// Socket type produced by [`connect`].
pub type ChatSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Opens the connection described by `config`.
///
/// Failures are returned as-is; nothing is retried.
pub async fn connect(config: &Config) -> Result<ChatSocket> {
    let url = config.endpoint()?;
    debug!("connecting to {}", url);
    let (socket, response) = connect_async(url.as_str()).await?;
    trace!("handshake response: {:?}", response);
    Ok(socket)
}

/// Connects and runs a session until either side finishes. Returns the
/// resulting log.
pub async fn run<L, W>(config: &Config, lines: L, out: &mut W) -> Result<Transcript>
where
    L: Stream<Item = String> + Unpin,
    W: AsyncWrite + Unpin,
{
    let socket = connect(config).await?;
    let mut session = Session::new(config.format);
    session.run(socket, lines, out).await?;
    Ok(session.transcript().clone())
}
