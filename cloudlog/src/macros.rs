//! Variadic call-site macros.
//!
//! Each argument after the logger (and after the format string for the `…f` forms) is converted
//! with [`Value::from`](crate::Value), so plain literals and variables can be passed directly.

/// Logs the concatenation of the values with the given severity.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{Logger, Severity, log};
///
/// let logger = Logger::new();
/// let attempt = 3;
/// log!(logger, Severity::Notice, "attempt ", attempt, " of ", 5);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr $(, $value:expr)* $(,)?) => {
        $logger.log($severity, &[$($crate::Value::from($value)),*])
    };
}

/// Logs a format string interpolated with the values with the given severity.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{Logger, Severity, logf};
///
/// let logger = Logger::new();
/// logf!(logger, Severity::Info, "%s took %.2fms", "request", 12.3456);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $severity:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $logger.logf($severity, $format, &[$($crate::Value::from($value)),*])
    };
}

/// Logs a `DEFAULT` entry, concatenating the values.
#[macro_export]
macro_rules! default {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Default $(, $value)*)
    };
}

/// Logs a `DEFAULT` entry from a format string.
#[macro_export]
macro_rules! defaultf {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Default, $format $(, $value)*)
    };
}

/// Logs a `DEBUG` entry, concatenating the values.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{Logger, debug};
///
/// let logger = Logger::new();
/// let cache_hits = 17;
/// debug!(logger, "cache hits: ", cache_hits);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Debug $(, $value)*)
    };
}

/// Logs a `DEBUG` entry from a format string.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Debug, $format $(, $value)*)
    };
}

/// Logs an `INFO` entry, concatenating the values.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{Logger, info};
///
/// let logger = Logger::new();
/// info!(logger, "a", 1);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Info $(, $value)*)
    };
}

/// Logs an `INFO` entry from a format string.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{Logger, infof};
///
/// let logger = Logger::new();
/// infof!(logger, "count=%d", 5);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Info, $format $(, $value)*)
    };
}

/// Logs a `NOTICE` entry, concatenating the values.
#[macro_export]
macro_rules! notice {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Notice $(, $value)*)
    };
}

/// Logs a `NOTICE` entry from a format string.
#[macro_export]
macro_rules! noticef {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Notice, $format $(, $value)*)
    };
}

/// Logs a `WARNING` entry, concatenating the values.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Warning $(, $value)*)
    };
}

/// Logs a `WARNING` entry from a format string.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{Logger, warningf};
///
/// let logger = Logger::new();
/// let used = 0.93;
/// warningf!(logger, "disk %.0f%% full", used * 100.0);
/// ```
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Warning, $format $(, $value)*)
    };
}

/// Logs an `ERROR` entry, concatenating the values.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Error $(, $value)*)
    };
}

/// Logs an `ERROR` entry from a format string.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Error, $format $(, $value)*)
    };
}

/// Logs a `CRITICAL` entry, concatenating the values.
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Critical $(, $value)*)
    };
}

/// Logs a `CRITICAL` entry from a format string.
#[macro_export]
macro_rules! criticalf {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Critical, $format $(, $value)*)
    };
}

/// Logs an `ALERT` entry, concatenating the values.
#[macro_export]
macro_rules! alert {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Alert $(, $value)*)
    };
}

/// Logs an `ALERT` entry from a format string.
#[macro_export]
macro_rules! alertf {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Alert, $format $(, $value)*)
    };
}

/// Logs an `EMERGENCY` entry, concatenating the values.
#[macro_export]
macro_rules! emergency {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Emergency $(, $value)*)
    };
}

/// Logs an `EMERGENCY` entry from a format string.
#[macro_export]
macro_rules! emergencyf {
    ($logger:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::Severity::Emergency, $format $(, $value)*)
    };
}
