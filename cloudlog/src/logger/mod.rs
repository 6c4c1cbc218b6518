//! The severity-aware logger.

mod builder;

use std::sync::Arc;

use serde::Serialize;

pub use builder::Builder;

use crate::diagnostics::Diagnostics;
use crate::sink::Sink;
use crate::{Error, LogEntry, Severity, Value, sprint, sprintf};

/// Writes one structured JSON line per call, tagged with a severity.
///
/// There is one pair of operations per [`Severity`]: the plain form concatenates its values like
/// [`sprint`], the `…f` form interpolates them into a format string like [`sprintf`]. Logging
/// never fails and never panics, failures go to the logger's
/// [`Diagnostics`] channel instead.
///
/// Loggers are cheap to clone and can be shared freely between threads. Concurrent calls never
/// interleave within a line.
///
/// # Examples
///
/// ```rust
/// use cloudlog::Logger;
///
/// let logger = Logger::new();
/// logger.info(&["listening on port ".into(), 8080.into()]);
/// logger.warningf("retrying in %.1fs (attempt %d)", &[2.5.into(), 3.into()]);
/// ```
///
/// Prints:
///
/// ```text
/// {"message":"listening on port 8080","severity":"INFO"}
/// {"message":"retrying in 2.5s (attempt 3)","severity":"WARNING"}
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    sink: Arc<dyn Sink>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Logger {
    /// Creates a logger writing to standard output, reporting failures on standard error.
    #[expect(
        clippy::new_without_default,
        reason = "`default` is the operation for the DEFAULT severity"
    )]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a logger for a request or invocation context.
    ///
    /// The context is accepted for call-site compatibility with serverless handlers and is not
    /// used, the logger is identical to [`Logger::new()`].
    pub fn with_context<C>(_context: &C) -> Self
    where
        C: ?Sized,
    {
        Self::new()
    }

    /// Returns a [`Builder`] to configure the sink and diagnostics channel.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Logs the concatenation of `values` with the given severity.
    pub fn log(&self, severity: Severity, values: &[Value<'_>]) {
        self.log_entry(&LogEntry::new(severity, sprint(values)));
    }

    /// Logs `format` interpolated with `values` with the given severity.
    pub fn logf(&self, severity: Severity, format: &str, values: &[Value<'_>]) {
        self.log_entry(&LogEntry::new(severity, sprintf(format, values)));
    }

    /// Logs a pre-built entry.
    pub fn log_entry(&self, entry: &LogEntry) {
        self.export(entry);
    }

    /// Encodes `entry` and writes it as one line.
    ///
    /// On a serialization failure nothing is written.
    fn export<T>(&self, entry: &T)
    where
        T: Serialize + ?Sized,
    {
        let line = match serde_json::to_string(entry) {
            Ok(line) => line,
            Err(error) => {
                self.diagnostics.report(&Error::Serialize(error));
                return;
            }
        };

        if let Err(error) = self.sink.write_line(&line) {
            self.diagnostics.report(&Error::Write(error));
        }
    }
}

macro_rules! severity_operations {
    ($(
        $severity:ident($label:literal): $plain:ident, $formatted:ident, $summary:literal;
    )*) => {
        impl Logger {
            $(
                #[doc = concat!("Logs an entry with severity `", $label, "`. ", $summary)]
                ///
                /// The values are concatenated as by [`sprint`].
                pub fn $plain(&self, values: &[Value<'_>]) {
                    self.log(Severity::$severity, values);
                }

                #[doc = concat!("Logs an entry with severity `", $label, "`. ", $summary)]
                ///
                /// The values are interpolated into `format` as by [`sprintf`].
                pub fn $formatted(&self, format: &str, values: &[Value<'_>]) {
                    self.logf(Severity::$severity, format, values);
                }
            )*
        }
    };
}

severity_operations! {
    Default("DEFAULT"): default, defaultf, "No assigned severity level.";
    Debug("DEBUG"): debug, debugf, "For debug or trace information.";
    Info("INFO"): info, infof, "For routine information, such as ongoing status or performance.";
    Notice("NOTICE"): notice, noticef, "For normal but significant events, such as start up, shut down, or a configuration change.";
    Warning("WARNING"): warning, warningf, "For warning events that might cause problems.";
    Error("ERROR"): error, errorf, "For error events that are likely to cause problems.";
    Critical("CRITICAL"): critical, criticalf, "For critical events that cause more severe problems or outages.";
    Alert("ALERT"): alert, alertf, "For when a person must take an action immediately.";
    Emergency("EMERGENCY"): emergency, emergencyf, "For when one or more systems are unusable.";
}
