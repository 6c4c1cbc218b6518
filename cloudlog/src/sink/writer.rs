use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use super::Sink;

/// A sink that writes lines to any [`Write`] implementation, such as a file or a socket.
///
/// The writer is guarded by a mutex. A lock poisoned by a panicking thread is taken over
/// rather than disabling the sink.
///
/// # Examples
///
/// ```rust
/// use cloudlog::Logger;
/// use cloudlog::sink::WriterSink;
///
/// let logger = Logger::builder().sink(WriterSink::new(std::io::stderr())).build();
/// logger.warning(&["written to stderr".into()]);
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W> WriterSink<W>
where
    W: Write + Send,
{
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink").finish_non_exhaustive()
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + Send,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        let record = super::terminated(line);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(record.as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::WriterSink;
    use crate::sink::Sink;

    #[test]
    fn appends_newlines() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        assert_eq!(sink.into_inner(), b"first\nsecond\n");
    }

    /// Records every `write` call separately.
    #[derive(Default)]
    struct Chunks(Vec<Vec<u8>>);

    impl Write for Chunks {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_each_line_in_one_call() {
        let sink = WriterSink::new(Chunks::default());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        assert_eq!(sink.into_inner().0, [b"first\n".to_vec(), b"second\n".to_vec()]);
    }

    #[test]
    fn survives_poisoning() {
        let sink = Arc::new(WriterSink::new(Vec::new()));

        let poisoner = Arc::clone(&sink);
        let result = std::thread::spawn(move || {
            let _guard = poisoner.writer.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());
        assert!(sink.writer.is_poisoned());

        sink.write_line("still here").unwrap();
        let sink = Arc::into_inner(sink).unwrap();
        assert_eq!(sink.into_inner(), b"still here\n");
    }
}
