use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use super::Sink;

/// A sink for testing that stores all lines in memory.
#[derive(Debug)]
pub struct MemorySink {
    /// Shared vector storing every line written, without newlines.
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates a new memory sink and returns both the sink and a handle to the line storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloudlog::Logger;
    /// use cloudlog::sink::MemorySink;
    ///
    /// let (sink, lines) = MemorySink::new();
    /// let logger = Logger::builder().sink(sink).build();
    /// logger.info(&["a".into(), 1.into()]);
    ///
    /// assert_eq!(*lines.lock().unwrap(), [r#"{"message":"a1","severity":"INFO"}"#]);
    /// ```
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: lines.clone(),
            },
            lines,
        )
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
        Ok(())
    }
}
