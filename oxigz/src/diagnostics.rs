//! Diagnostics sinks for errors swallowed by the byte helpers.

use oxigz_core::GzError;
use std::fmt;
use tracing::warn;

/// Helper operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Gzip encoding of a byte buffer.
    Compress,
    /// Gzip decoding of a byte buffer.
    Decompress,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compress => write!(f, "compress"),
            Self::Decompress => write!(f, "decompress"),
        }
    }
}

/// Receives codec errors that were replaced by a fallback value.
pub trait Diagnostics {
    /// Report an error raised during `operation`.
    fn codec_error(&self, operation: Operation, error: &GzError);
}

impl<F> Diagnostics for F
where
    F: Fn(Operation, &GzError),
{
    fn codec_error(&self, operation: Operation, error: &GzError) {
        self(operation, error)
    }
}

/// Emits a `tracing` warning for every reported error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn codec_error(&self, operation: Operation, error: &GzError) {
        warn!(%operation, %error, "gzip {} failed, returning fallback", operation);
    }
}

/// Discards all reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn codec_error(&self, _operation: Operation, _error: &GzError) {}
}
