//! The fallback channel for failures on the logging path.
//!
//! Logging operations never return errors to their callers. When an entry cannot be encoded or
//! written, the [`Error`] is handed to the logger's [`Diagnostics`] channel instead, which must
//! not itself depend on the structured output that just failed.
//!
//! # Built-in Channels
//!
//! - [`StderrDiagnostics`] - Writes a plain-text line to standard error, the default
//! - [`TracingDiagnostics`] - Emits a `tracing` error event (requires the `tracing` feature)
//! - [`MemoryDiagnostics`] - Collects reports in memory for testing purposes

mod memory;
mod stderr;
#[cfg(feature = "tracing")]
mod tracing;

use std::fmt::Debug;

#[doc(hidden)]
pub use memory::MemoryDiagnostics;
pub use stderr::StderrDiagnostics;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingDiagnostics;

use crate::Error;

/// Receives failures that happened while emitting a log entry.
///
/// # Examples
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use cloudlog::Error;
/// use cloudlog::diagnostics::Diagnostics;
///
/// #[derive(Debug, Default)]
/// struct CountFailures(AtomicUsize);
///
/// impl Diagnostics for CountFailures {
///     fn report(&self, _error: &Error) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
///
/// let logger = cloudlog::Logger::builder()
///     .diagnostics(CountFailures::default())
///     .build();
/// ```
pub trait Diagnostics: Debug + Send + Sync {
    /// Reports a single failure.
    ///
    /// This is called on the thread that attempted to log, it should not block for long.
    fn report(&self, error: &Error);
}
