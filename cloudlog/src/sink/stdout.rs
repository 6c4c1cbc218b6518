use std::io::{self, Write};

use super::Sink;

/// A sink that writes lines to standard output, without any decoration.
///
/// # Examples
///
/// ```rust
/// use cloudlog::Logger;
/// use cloudlog::sink::StdoutSink;
///
/// let logger = Logger::builder().sink(StdoutSink::DEFAULT).build();
/// logger.notice(&["ready".into()]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink(());

impl StdoutSink {
    /// A `const` version of `StdoutSink::default()`.
    pub const DEFAULT: Self = StdoutSink(());
}

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let record = super::terminated(line);
        let mut stdout = io::stdout().lock();
        stdout.write_all(record.as_bytes())?;
        stdout.flush()
    }
}
