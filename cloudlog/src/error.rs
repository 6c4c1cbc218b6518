//! Failures that can happen while emitting a log entry.
//!
//! None of these ever reach the caller of a logging operation, they are handed to the
//! configured [`Diagnostics`](crate::diagnostics::Diagnostics) channel instead.

/// Errors produced while turning a log entry into an output line.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The entry could not be encoded as JSON.
    #[error("failed to serialize log entry")]
    Serialize(#[from] serde_json::Error),

    /// The encoded line could not be written to the sink.
    #[error("failed to write log entry")]
    Write(#[from] std::io::Error),
}
