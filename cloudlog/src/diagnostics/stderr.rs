use std::error::Error as _;
use std::io::Write;

use super::Diagnostics;
use crate::Error;

/// Reports failures as plain text on standard error.
///
/// Each report is one line of the form `[cloudlog] <error>: <cause>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics(());

impl StderrDiagnostics {
    /// A `const` version of `StderrDiagnostics::default()`.
    pub const DEFAULT: Self = StderrDiagnostics(());
}

impl Diagnostics for StderrDiagnostics {
    fn report(&self, error: &Error) {
        format_report(error, std::io::stderr().lock());
    }
}

fn format_report(error: &Error, mut output: impl Write) {
    let report = match error.source() {
        Some(source) => format!("[cloudlog] {error}: {source}\n"),
        None => format!("[cloudlog] {error}\n"),
    };
    // There is nowhere left to report a failure to write the report.
    let _ = output.write_all(report.as_bytes());
}
