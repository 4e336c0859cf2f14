//! Rendering of inbound payloads into log lines.
//!
//! Two modes exist. `Raw` logs the payload exactly as received. `Stamped`
//! expects every payload to be a JSON object carrying a preformatted
//! timestamp (`hms`) and a body (`text`) and logs `[hms] text`. Outbound
//! traffic is never formatted: whatever the user typed goes out verbatim.

use std::fmt;

use serde_json::Value;

use crate::error::Result;

/// Rendered in place of a field the payload does not carry.
const UNDEFINED: &str = "undefined";

/// How inbound messages are turned into log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MessageFormat {
    /// Append the payload as-is.
    #[default]
    #[value(alias = "text")]
    Raw,
    /// Parse `{"hms": .., "text": ..}` and append `[hms] text`.
    #[value(alias = "json")]
    Stamped,
}

impl MessageFormat {
    /// Turns one inbound payload into exactly one log line.
    ///
    /// Only a payload that is not JSON at all fails. The shape is not
    /// checked: strings are used as-is, other values in their JSON form,
    /// and absent fields as `undefined`.
    pub fn render(self, payload: &str) -> Result<String> {
        match self {
            MessageFormat::Raw => Ok(payload.to_owned()),
            MessageFormat::Stamped => {
                let msg: Value = serde_json::from_str(payload)?;
                Ok(format!("[{}] {}", field(&msg, "hms"), field(&msg, "text")))
            }
        }
    }
}

fn field(msg: &Value, name: &str) -> String {
    match msg.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => UNDEFINED.to_owned(),
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageFormat::Raw => f.write_str("raw"),
            MessageFormat::Stamped => f.write_str("stamped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MessageFormat;
    use crate::error::Error;

    #[test]
    fn raw_passes_payload_through() {
        let line = MessageFormat::Raw.render("hello").unwrap();
        assert_eq!(line, "hello");

        let line = MessageFormat::Raw.render(r#"{"hms":"10:00:00","text":"x"}"#).unwrap();
        assert_eq!(line, r#"{"hms":"10:00:00","text":"x"}"#);
    }

    #[test]
    fn raw_keeps_empty_payload() {
        assert_eq!(MessageFormat::Raw.render("").unwrap(), "");
    }

    #[test]
    fn stamped_prefixes_timestamp() {
        let line = MessageFormat::Stamped
            .render(r#"{"hms":"12:34:56","text":"hi there"}"#)
            .unwrap();
        assert_eq!(line, "[12:34:56] hi there");
    }

    #[test]
    fn stamped_ignores_extra_fields() {
        let line = MessageFormat::Stamped
            .render(r#"{"user":"bob","text":"yo","hms":"01:02:03"}"#)
            .unwrap();
        assert_eq!(line, "[01:02:03] yo");
    }

    #[test]
    fn stamped_unescapes_strings() {
        let line = MessageFormat::Stamped
            .render(r#"{"hms":"00:00:01","text":"say \"hi\""}"#)
            .unwrap();
        assert_eq!(line, "[00:00:01] say \"hi\"");
    }

    #[test]
    fn stamped_rejects_malformed_json() {
        let err = MessageFormat::Stamped.render("not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn stamped_renders_any_valid_json() {
        let render = |payload| MessageFormat::Stamped.render(payload).unwrap();

        assert_eq!(render(r#"{"hms":5,"text":"x"}"#), "[5] x");
        assert_eq!(render(r#"{"text":"no time"}"#), "[undefined] no time");
        assert_eq!(render(r#"{"hms":"1","text":null}"#), "[1] null");
        assert_eq!(render(r#"{"hms":true,"text":[1,2]}"#), "[true] [1,2]");
        assert_eq!(render(r#""just a string""#), "[undefined] undefined");
        assert_eq!(render("{}"), "[undefined] undefined");
    }

    #[test]
    fn display_names() {
        assert_eq!(MessageFormat::Raw.to_string(), "raw");
        assert_eq!(MessageFormat::Stamped.to_string(), "stamped");
    }
}
