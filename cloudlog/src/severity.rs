//! Cloud Logging severity levels.
//!
//! The labels are consumed by the ingestion pipeline for filtering and alerting, so they are
//! serialized byte-for-byte as the upper-case strings below.
//!
//! | Variant                   | Label       | Level |
//! |---------------------------|-------------|-------|
//! | [`Severity::Default`]     | `DEFAULT`   | 0     |
//! | [`Severity::Debug`]       | `DEBUG`     | 100   |
//! | [`Severity::Info`]        | `INFO`      | 200   |
//! | [`Severity::Notice`]      | `NOTICE`    | 300   |
//! | [`Severity::Warning`]     | `WARNING`   | 400   |
//! | [`Severity::Error`]       | `ERROR`     | 500   |
//! | [`Severity::Critical`]    | `CRITICAL`  | 600   |
//! | [`Severity::Alert`]       | `ALERT`     | 700   |
//! | [`Severity::Emergency`]   | `EMERGENCY` | 800   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log entry severity levels, ordered from least to most severe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// The log entry has no assigned severity level.
    Default,

    /// Debug or trace information.
    Debug,

    /// Routine information, such as ongoing status or performance.
    Info,

    /// Normal but significant events, such as start up, shut down, or a configuration change.
    Notice,

    /// Warning events that might cause problems.
    Warning,

    /// Error events that are likely to cause problems.
    Error,

    /// Critical events that cause more severe problems or outages.
    Critical,

    /// A person must take an action immediately.
    Alert,

    /// One or more systems are unusable.
    Emergency,
}

impl Severity {
    /// Every severity, from [`Severity::Default`] to [`Severity::Emergency`].
    pub const ALL: [Severity; 9] = [
        Severity::Default,
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    /// Returns the label written into the `severity` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Alert => "ALERT",
            Severity::Emergency => "EMERGENCY",
        }
    }

    /// Returns the numeric Cloud Logging level, `0` for [`Severity::Default`] and then steps of
    /// `100` up to `800` for [`Severity::Emergency`].
    pub const fn level(self) -> u16 {
        match self {
            Severity::Default => 0,
            Severity::Debug => 100,
            Severity::Info => 200,
            Severity::Notice => 300,
            Severity::Warning => 400,
            Severity::Error => 500,
            Severity::Critical => 600,
            Severity::Alert => 700,
            Severity::Emergency => 800,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width and alignment flags apply.
        f.pad(self.as_str())
    }
}

/// Returned by [`Severity::from_str`] for anything other than one of the nine labels.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown severity label {0:?}")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses an exact, case-sensitive severity label.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == label)
            .ok_or_else(|| ParseSeverityError(label.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{ParseSeverityError, Severity};

    #[test_case(Severity::Default, "DEFAULT", 0)]
    #[test_case(Severity::Debug, "DEBUG", 100)]
    #[test_case(Severity::Info, "INFO", 200)]
    #[test_case(Severity::Notice, "NOTICE", 300)]
    #[test_case(Severity::Warning, "WARNING", 400)]
    #[test_case(Severity::Error, "ERROR", 500)]
    #[test_case(Severity::Critical, "CRITICAL", 600)]
    #[test_case(Severity::Alert, "ALERT", 700)]
    #[test_case(Severity::Emergency, "EMERGENCY", 800)]
    fn labels_and_levels(severity: Severity, label: &str, level: u16) {
        assert_eq!(severity.as_str(), label);
        assert_eq!(severity.to_string(), label);
        assert_eq!(severity.level(), level);
        assert_eq!(label.parse::<Severity>(), Ok(severity));
        assert_eq!(
            serde_json::to_string(&severity).unwrap(),
            format!("\"{label}\"")
        );
    }

    #[test]
    fn all_is_sorted_and_complete() {
        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
        assert!(Severity::ALL.windows(2).all(|w| w[0].level() < w[1].level()));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            "info".parse::<Severity>(),
            Err(ParseSeverityError("info".to_owned()))
        );
        assert!("".parse::<Severity>().is_err());
        assert!("WARN".parse::<Severity>().is_err());
    }

    #[test]
    fn display_respects_padding() {
        assert_eq!(format!("[{:>7}]", Severity::Info), "[   INFO]");
    }
}
