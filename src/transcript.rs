//! The append-only conversation log.

use std::fmt;

/// Line appended when the connection opens.
pub const CONNECTION_OPENED: &str = "Connection opened";

/// Ordered, append-only list of log lines.
///
/// Nothing is ever removed or rewritten. `value()` renders the whole log the
/// way a text area would show it: every line followed by a newline.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line and returns it as stored.
    pub fn append(&mut self, line: impl Into<String>) -> &str {
        self.lines.push(line.into());
        self.lines.last().map(String::as_str).unwrap_or_default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full accumulated text.
    pub fn value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let log = Transcript::new();
        assert!(log.is_empty());
        assert_eq!(log.value(), "");
    }

    #[test]
    fn value_accumulates_lines() {
        let mut log = Transcript::new();
        log.append(CONNECTION_OPENED);
        log.append("hello");
        assert_eq!(log.value(), "Connection opened\nhello\n");
        assert_eq!(log.lines(), ["Connection opened", "hello"]);
    }

    #[test]
    fn each_append_extends_previous_state() {
        let mut log = Transcript::new();
        let mut previous = log.clone();
        for i in 0..20 {
            log.append(format!("line {}", i));
            assert_eq!(log.len(), previous.len() + 1);
            assert_eq!(&log.lines()[..previous.len()], previous.lines());
            assert!(log.value().starts_with(&previous.value()));
            previous = log.clone();
        }
    }

    #[test]
    fn empty_lines_still_count() {
        let mut log = Transcript::new();
        assert_eq!(log.append(""), "");
        assert_eq!(log.len(), 1);
        assert_eq!(log.value(), "\n");
    }
}
