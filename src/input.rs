//! The message input field.

use std::io::BufRead;

use futures_channel::mpsc::UnboundedSender;
use log::*;

/// Key code the browser reports for Enter.
pub const ENTER_KEY_CODE: u32 = 13;

/// A key press delivered to the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
    /// Anything else, identified by its key code.
    Other(u32),
}

impl Key {
    /// Maps a raw key code. Printable codes are treated as characters.
    pub fn from_code(code: u32) -> Key {
        match code {
            ENTER_KEY_CODE => Key::Enter,
            8 => Key::Backspace,
            32..=126 => char::from_u32(code).map_or(Key::Other(code), Key::Char),
            _ => Key::Other(code),
        }
    }
}

/// Single-line text input.
///
/// Typing edits the value. Enter on a non-empty value hands the value back
/// to the caller for sending and clears the field; Enter on an empty field
/// does nothing.
#[derive(Debug, Default)]
pub struct InputField {
    value: String,
    focused: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Types every character of `text` in order.
    pub fn type_str(&mut self, text: &str) {
        text.chars().for_each(|c| {
            self.key_down(Key::Char(c));
        });
    }

    /// Handles one key press. Returns the text to send, if any.
    pub fn key_down(&mut self, key: Key) -> Option<String> {
        match key {
            Key::Enter if !self.value.is_empty() => Some(std::mem::take(&mut self.value)),
            Key::Char(c) => {
                self.value.push(c);
                None
            }
            Key::Backspace => {
                self.value.pop();
                None
            }
            Key::Enter | Key::Other(_) => None,
        }
    }
}

/// Reads `reader` line by line and forwards every line to `tx`.
///
/// Line endings are stripped. Bytes that are not UTF-8 are replaced rather
/// than ending the input. Returns on end of input, on a read error, or once
/// the receiving side is gone.
pub fn forward_lines<R: BufRead>(mut reader: R, tx: UnboundedSender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                debug!("input read error: {}", e);
                break;
            }
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.to_owned(),
            Err(_) => {
                warn!("input line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(&buf).into_owned()
            }
        };
        if tx.unbounded_send(line).is_err() {
            break;
        }
    }
}
