//! Output destinations for structured log lines.
//!
//! Every successful logging call hands exactly one line of JSON to a [`Sink`]. The sink owns
//! whatever synchronization its destination needs so that lines from concurrent callers never
//! interleave.
//!
//! # Built-in Sinks
//!
//! - [`StdoutSink`] - Writes to the process's standard output, the default
//! - [`WriterSink`] - Writes to any [`std::io::Write`] implementation
//! - [`MemorySink`] - Collects lines in memory for testing purposes

mod memory;
mod stdout;
mod writer;

use std::fmt::Debug;
use std::io;

#[doc(hidden)]
pub use memory::MemorySink;
pub use stdout::StdoutSink;
pub use writer::WriterSink;

/// A destination for structured log lines.
///
/// # Examples
///
/// ```rust
/// use std::io;
///
/// use cloudlog::sink::Sink;
///
/// #[derive(Debug)]
/// struct Discard;
///
/// impl Sink for Discard {
///     fn write_line(&self, _line: &str) -> io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let logger = cloudlog::Logger::builder().sink(Discard).build();
/// logger.info(&["dropped".into()]);
/// ```
pub trait Sink: Debug + Send + Sync {
    /// Writes `line` followed by a newline.
    ///
    /// The line never contains a newline itself. Implementations must write the whole line in one
    /// step with respect to other callers of the same sink.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Appends the line terminator, so a sink can hand the whole record to a single write.
fn terminated(line: &str) -> String {
    let mut record = String::with_capacity(line.len() + 1);
    record.push_str(line);
    record.push('\n');
    record
}
