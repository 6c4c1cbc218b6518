use std::sync::Arc;

use super::Logger;
use crate::diagnostics::{Diagnostics, StderrDiagnostics};
use crate::sink::{Sink, StdoutSink};

/// Builder for a [`Logger`] with a custom sink or diagnostics channel.
///
/// Created via [`Logger::builder()`] and finalized with [`build()`](Builder::build). Anything
/// not configured keeps the defaults of [`Logger::new()`]: [`StdoutSink`] and
/// [`StderrDiagnostics`].
///
/// # Examples
///
/// ```rust
/// use cloudlog::Logger;
/// use cloudlog::diagnostics::StderrDiagnostics;
/// use cloudlog::sink::WriterSink;
///
/// let logger = Logger::builder()
///     .sink(WriterSink::new(Vec::new()))
///     .diagnostics(StderrDiagnostics::DEFAULT)
///     .build();
/// logger.debug(&["configured".into()]);
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct Builder {
    sink: Option<Arc<dyn Sink>>,
    diagnostics: Option<Arc<dyn Diagnostics>>,
}

impl Builder {
    /// Sets the destination for log lines.
    pub fn sink(self, sink: impl Sink + 'static) -> Self {
        self.shared_sink(Arc::new(sink))
    }

    /// Sets a destination for log lines that is shared with other loggers.
    pub fn shared_sink(self, sink: Arc<dyn Sink>) -> Self {
        Self {
            sink: Some(sink),
            ..self
        }
    }

    /// Sets the channel that receives serialization and write failures.
    pub fn diagnostics(self, diagnostics: impl Diagnostics + 'static) -> Self {
        Self {
            diagnostics: Some(Arc::new(diagnostics)),
            ..self
        }
    }

    /// Creates the logger.
    pub fn build(self) -> Logger {
        Logger {
            sink: self.sink.unwrap_or_else(|| Arc::new(StdoutSink::DEFAULT)),
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(StderrDiagnostics::DEFAULT)),
        }
    }
}
