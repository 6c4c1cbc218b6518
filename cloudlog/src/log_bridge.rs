//! Routing of the [`log`] facade into a [`Logger`].
//!
//! | `log` level        | Severity  |
//! |--------------------|-----------|
//! | `Error`            | `ERROR`   |
//! | `Warn`             | `WARNING` |
//! | `Info`             | `INFO`    |
//! | `Debug`, `Trace`   | `DEBUG`   |

use crate::{LogEntry, Logger, Severity};

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        // Filtering is left to `log::set_max_level`.
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let entry = LogEntry::new(record.level().into(), record.args().to_string());
        self.log_entry(&entry);
    }

    fn flush(&self) {}
}

impl Logger {
    /// Installs this logger as the global [`log`] logger, with the given maximum level.
    ///
    /// # Errors
    ///
    /// Fails if a global logger has already been set.
    ///
    /// # Calling [`log::Log`] directly
    ///
    /// The inherent [`Logger::log`] takes precedence over [`log::Log::log`] in method call syntax,
    /// so a record is passed to the trait with a fully qualified call:
    ///
    /// ```rust
    /// use cloudlog::Logger;
    ///
    /// let logger = Logger::new();
    /// log::Log::log(
    ///     &logger,
    ///     &log::Record::builder()
    ///         .level(log::Level::Warn)
    ///         .args(format_args!("disk at {}%", 91))
    ///         .build(),
    /// );
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloudlog::Logger;
    ///
    /// Logger::new().install(log::LevelFilter::Info)?;
    /// log::info!("routed through cloudlog");
    /// # Ok::<(), log::SetLoggerError>(())
    /// ```
    pub fn install(self, max_level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::Severity;

    #[test_case(log::Level::Error => Severity::Error)]
    #[test_case(log::Level::Warn => Severity::Warning)]
    #[test_case(log::Level::Info => Severity::Info)]
    #[test_case(log::Level::Debug => Severity::Debug)]
    #[test_case(log::Level::Trace => Severity::Debug)]
    fn maps_levels(level: log::Level) -> Severity {
        level.into()
    }
}
