//! The chat client itself: event handlers plus the loop that feeds them.
//!
//! A `Session` owns the log, the input field and the selected inbound
//! format. The handlers are plain synchronous methods, so each event runs to
//! completion before the next one is looked at; `run` just pulls events from
//! the socket and the input side one at a time and dispatches them.

use std::io;

use futures_util::{
    sink::{Sink, SinkExt},
    stream::{Stream, StreamExt},
};
use log::*;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tungstenite::{error::Error as WsError, protocol::Message};

use crate::error::Result;
use crate::format::MessageFormat;
use crate::input::{InputField, Key};
use crate::transcript::{Transcript, CONNECTION_OPENED};

/// One client attached to one connection.
#[derive(Debug)]
pub struct Session {
    format: MessageFormat,
    transcript: Transcript,
    input: InputField,
}

impl Session {
    /// Creates a session with an empty log and the input focused.
    pub fn new(format: MessageFormat) -> Self {
        let mut input = InputField::new();
        input.focus();
        Session { format, transcript: Transcript::new(), input }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    /// The connection is open.
    pub fn on_open(&mut self) -> &str {
        info!("Connection opened");
        self.transcript.append(CONNECTION_OPENED)
    }

    /// An inbound frame arrived. Returns the appended line, or `None` when
    /// nothing was logged.
    ///
    /// Control frames are never logged. In stamped mode a payload that does
    /// not decode is dropped with a warning and the session carries on.
    pub fn on_message(&mut self, message: &Message) -> Option<&str> {
        let payload = match message {
            Message::Text(text) => text.as_str().to_owned(),
            Message::Binary(data) => String::from_utf8_lossy(data).into_owned(),
            Message::Ping(_) | Message::Pong(_) | Message::Close(_) | Message::Frame(_) => {
                trace!("ignoring control frame");
                return None;
            }
        };

        match self.format.render(&payload) {
            Ok(line) => Some(self.transcript.append(line)),
            Err(e) => {
                warn!("dropping inbound message: {}", e);
                None
            }
        }
    }

    /// A key was pressed in the input field. Returns the frame to send.
    pub fn on_key(&mut self, key: Key) -> Option<Message> {
        self.input.key_down(key).map(|value| {
            debug!("sending {} bytes", value.len());
            Message::text(value)
        })
    }

    /// Types a whole line into the input and presses Enter.
    pub fn on_line(&mut self, line: &str) -> Option<Message> {
        self.input.type_str(line);
        self.on_key(Key::Enter)
    }

    /// Drives the session over an already open connection.
    ///
    /// `lines` yields what the user typed, one entry per Enter press. Every
    /// line appended to the log is also written to `out`. The loop ends when
    /// the peer closes the connection or when `lines` is exhausted, in which
    /// case the connection is closed from this side.
    pub async fn run<S, L, W>(&mut self, mut socket: S, mut lines: L, out: &mut W) -> Result<()>
    where
        S: Stream<Item = Result<Message, WsError>> + Sink<Message, Error = WsError> + Unpin,
        L: Stream<Item = String> + Unpin,
        W: AsyncWrite + Unpin,
    {
        let opened = self.on_open();
        emit(out, opened).await?;

        loop {
            tokio::select! {
                inbound = socket.next() => match inbound {
                    Some(Ok(Message::Close(frame))) => {
                        debug!("peer closed the connection: {:?}", frame);
                        break;
                    }
                    Some(Ok(message)) => {
                        if let Some(line) = self.on_message(&message) {
                            emit(out, line).await?;
                        }
                    }
                    Some(Err(e)) => {
                        debug!("connection error: {}", e);
                        return Err(e.into());
                    }
                    None => {
                        debug!("connection stream ended");
                        break;
                    }
                },
                typed = lines.next() => match typed {
                    Some(line) => {
                        if let Some(message) = self.on_line(&line) {
                            socket.send(message).await?;
                        }
                    }
                    None => {
                        debug!("input ended, closing connection");
                        break;
                    }
                },
            }
        }

        match socket.close().await {
            Ok(()) | Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => {}
            Err(e) => debug!("websocket close error: {}", e),
        }
        Ok(())
    }
}

async fn emit<W>(out: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
