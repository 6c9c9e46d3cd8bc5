//! Error types for OxiGz operations.
//!
//! Byte-level helpers convert these errors into a caller-supplied fallback
//! and report them to a diagnostics sink; stream-level helpers return them.

use std::io;
use thiserror::Error;

/// The main error type for OxiGz operations.
#[derive(Debug, Error)]
pub enum GzError {
    /// I/O error from the underlying reader/writer or codec.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Produced output would exceed the configured size bound.
    #[error("Output limit exceeded: more than {limit} bytes")]
    OutputLimit {
        /// Maximum number of output bytes allowed.
        limit: usize,
    },

    /// A rewind was requested without a valid mark.
    #[error("Invalid mark: {message}")]
    InvalidMark {
        /// Why the mark is not usable.
        message: String,
    },
}

/// Result type alias for OxiGz operations.
pub type Result<T> = std::result::Result<T, GzError>;

impl GzError {
    /// Create an output limit error.
    pub fn output_limit(limit: usize) -> Self {
        Self::OutputLimit { limit }
    }

    /// Create an invalid mark error.
    pub fn invalid_mark(message: impl Into<String>) -> Self {
        Self::InvalidMark {
            message: message.into(),
        }
    }

    /// Convert an I/O error, recovering a `GzError` that was carried inside it.
    ///
    /// Codec layers only pass `io::Error` through, so errors raised by our own
    /// readers and writers arrive wrapped.
    pub fn from_io(err: io::Error) -> Self {
        if !err.get_ref().is_some_and(|inner| inner.is::<GzError>()) {
            return Self::Io(err);
        }

        let kind = err.kind();
        match err.into_inner().map(|inner| inner.downcast::<GzError>()) {
            Some(Ok(gz)) => *gz,
            Some(Err(other)) => Self::Io(io::Error::new(kind, other)),
            None => Self::Io(kind.into()),
        }
    }
}

impl From<GzError> for io::Error {
    fn from(err: GzError) -> Self {
        match err {
            GzError::Io(e) => e,
            other => {
                let kind = match other {
                    GzError::OutputLimit { .. } => io::ErrorKind::WriteZero,
                    _ => io::ErrorKind::InvalidInput,
                };
                io::Error::new(kind, other)
            }
        }
    }
}
