//! The structured record written for every log call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::severity::Severity;

/// A single structured log entry.
///
/// Serializes to `{"message":"…","severity":"…"}` with `message` first. The `severity` key is
/// left out entirely when no severity is set, the logging operations on
/// [`Logger`](crate::Logger) always set one.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{LogEntry, Severity};
///
/// let entry = LogEntry::new(Severity::Notice, "started");
/// assert_eq!(entry.to_json()?, r#"{"message":"started","severity":"NOTICE"}"#);
///
/// let bare = LogEntry::without_severity("started");
/// assert_eq!(bare.to_json()?, r#"{"message":"started"}"#);
/// # Ok::<(), cloudlog::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    severity: Option<Severity>,
}

impl LogEntry {
    /// Creates an entry with the given severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Some(severity),
        }
    }

    /// Creates an entry that carries no severity.
    pub fn without_severity(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: None,
        }
    }

    /// The formatted message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity, if one was set.
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Encodes the entry as a single line of JSON, without the trailing newline.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for LogEntry {
    /// Renders the JSON form.
    ///
    /// A string message and a severity label always encode, so the empty fallback is never
    /// reached. Use [`LogEntry::to_json`] where the encoding error matters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::LogEntry;
    use crate::Severity;

    #[test]
    fn field_order_is_message_then_severity() {
        let entry = LogEntry::new(Severity::Warning, "disk almost full");
        assert_eq!(
            entry.to_json().unwrap(),
            r#"{"message":"disk almost full","severity":"WARNING"}"#
        );
        assert_eq!(entry.to_string(), entry.to_json().unwrap());
    }

    #[test]
    fn missing_severity_is_omitted() {
        let entry = LogEntry::without_severity("no level");
        assert_eq!(entry.to_json().unwrap(), r#"{"message":"no level"}"#);

        let parsed: LogEntry = serde_json::from_str(r#"{"message":"no level"}"#).unwrap();
        assert_eq!(parsed, entry);
        assert_eq!(parsed.severity(), None);
    }

    #[test]
    fn escaping_round_trips() {
        let message = "he said \"hi\"\n\ttab \\ back\u{1}";
        let entry = LogEntry::new(Severity::Info, message);
        let json = entry.to_json().unwrap();

        assert_eq!(
            json,
            r#"{"message":"he said \"hi\"\n\ttab \\ back\u0001","severity":"INFO"}"#
        );
        assert!(!json.contains('\n'));

        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.message(), message);
        assert_eq!(parsed.severity(), Some(Severity::Info));
    }

    #[test]
    fn unknown_severity_is_rejected() {
        let result = serde_json::from_str::<LogEntry>(r#"{"message":"x","severity":"info"}"#);
        assert!(result.is_err());
    }
}
