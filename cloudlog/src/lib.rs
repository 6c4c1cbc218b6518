//! # `cloudlog`
//!
//! Severity-tagged logging as single-line JSON, the format serverless platforms and log
//! collectors ingest from standard output as structured entries.
//!
//! Every logging call writes exactly one line:
//!
//! ```text
//! {"message":"listening on port 8080","severity":"INFO"}
//! ```
//!
//! ## Features
//!
//! - **Nine severities**: `DEFAULT`, `DEBUG`, `INFO`, `NOTICE`, `WARNING`, `ERROR`, `CRITICAL`,
//!   `ALERT` and `EMERGENCY`, each with a concatenating and a printf-style operation
//! - **Infallible calls**: logging never returns an error or panics, failures are handed to a
//!   separate [`Diagnostics`](diagnostics::Diagnostics) channel
//! - **Injectable output**: lines go to a [`Sink`](sink::Sink), standard output by default
//! - **Thread safe**: concurrent calls never interleave within a line
//!
//! ## Feature Flags
//!
//! - `log` - Implement [`log::Log`] for [`Logger`] to route the `log` facade into it
//! - `tracing` - Enable [`TracingDiagnostics`](diagnostics::TracingDiagnostics)
//!
//! ## Basic Usage
//!
//! ```rust
//! use cloudlog::{Logger, info, infof};
//!
//! let logger = Logger::new();
//!
//! // Values are concatenated, with spaces only between two non-strings.
//! logger.info(&["user ".into(), 42.into(), " signed in".into()]);
//!
//! // Or interpolated into a printf-style format.
//! logger.errorf("request %s failed after %dms", &["GET /".into(), 120.into()]);
//!
//! // The macros convert each argument for you.
//! info!(logger, "cache size: ", 1024);
//! infof!(logger, "ratio=%.2f", 0.756);
//! ```
//!
//! ## Testing
//!
//! Output can be captured by building the logger with a custom sink:
//!
//! ```rust
//! use cloudlog::sink::WriterSink;
//! use cloudlog::{Logger, Severity};
//!
//! let sink = std::sync::Arc::new(WriterSink::new(Vec::new()));
//! let logger = Logger::builder().shared_sink(sink.clone()).build();
//! logger.log(Severity::Alert, &["paging on-call".into()]);
//! drop(logger);
//!
//! let sink = std::sync::Arc::into_inner(sink).unwrap();
//! assert_eq!(sink.into_inner(), b"{\"message\":\"paging on-call\",\"severity\":\"ALERT\"}\n");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
mod entry;
mod error;
#[cfg(feature = "log")]
mod log_bridge;
mod logger;
mod macros;
mod print;
pub mod printf;
mod severity;
pub mod sink;
mod value;

pub use entry::LogEntry;
pub use error::Error;
pub use logger::{Builder, Logger};
pub use print::sprint;
pub use printf::sprintf;
pub use severity::{ParseSeverityError, Severity};
pub use value::Value;
