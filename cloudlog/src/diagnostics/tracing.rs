use super::Diagnostics;
use crate::Error;

/// Reports failures as `tracing` error events.
///
/// Useful when the application already has a `tracing` subscriber writing somewhere other than
/// the logger's sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics(());

impl TracingDiagnostics {
    /// A `const` version of `TracingDiagnostics::default()`.
    pub const DEFAULT: Self = TracingDiagnostics(());
}

impl Diagnostics for TracingDiagnostics {
    fn report(&self, error: &Error) {
        match error {
            Error::Serialize(source) => {
                ::tracing::error!(?source, "failed to serialize log entry");
            }
            Error::Write(source) => {
                ::tracing::error!(?source, "failed to write log entry");
            }
        }
    }
}
