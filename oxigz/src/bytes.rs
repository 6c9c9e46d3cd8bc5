//! Best-effort gzip helpers for whole byte buffers.
//!
//! These never return an error: a codec failure is reported to the
//! [`Diagnostics`] sink and the caller's fallback buffer is returned instead.
//!
//! Input is considered compressed when it starts with the gzip magic number.
//! Raw data that happens to begin with `0x1F 0x8B` is therefore passed through
//! by [`GzipHelper::compress`] and rejected (fallback) by
//! [`GzipHelper::decompress_if_needed`].

use crate::diagnostics::{Diagnostics, Operation, TracingDiagnostics};
use crate::options::HelperOptions;
use crate::writer::GzipWriter;
use flate2::read::MultiGzDecoder;
use oxigz_core::error::{GzError, Result};
use oxigz_core::is_gzip;
use std::borrow::Cow;
use std::io::{self, Read, Write};

/// Gzip byte helper bound to a set of options and a diagnostics sink.
#[derive(Debug, Clone)]
pub struct GzipHelper<D = TracingDiagnostics> {
    options: HelperOptions,
    diagnostics: D,
}

impl GzipHelper {
    /// Helper with the given options, reporting through `tracing`.
    pub fn new(options: HelperOptions) -> Self {
        Self::with_diagnostics(options, TracingDiagnostics)
    }
}

impl<D: Diagnostics> GzipHelper<D> {
    /// Helper with the given options and diagnostics sink.
    pub fn with_diagnostics(options: HelperOptions, diagnostics: D) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &HelperOptions {
        &self.options
    }

    /// Gzip `src` unless it already looks gzip-encoded.
    ///
    /// Returns `src` unchanged when it starts with the gzip magic number,
    /// a newly encoded buffer otherwise, or `fallback` if encoding fails.
    pub fn compress<'a>(&self, src: &'a [u8], fallback: &'a [u8]) -> Cow<'a, [u8]> {
        if is_gzip(src) {
            return Cow::Borrowed(src);
        }

        match self.encode(src) {
            Ok(encoded) => Cow::Owned(encoded),
            Err(e) => {
                self.diagnostics.codec_error(Operation::Compress, &e);
                Cow::Borrowed(fallback)
            }
        }
    }

    /// Gunzip `src` if it looks gzip-encoded.
    ///
    /// Returns `src` unchanged when it lacks the gzip magic number, the fully
    /// decoded content otherwise, or `fallback` if decoding fails.
    pub fn decompress_if_needed<'a>(&self, src: &'a [u8], fallback: &'a [u8]) -> Cow<'a, [u8]> {
        if !is_gzip(src) {
            return Cow::Borrowed(src);
        }

        match self.decode(src) {
            Ok(decoded) => Cow::Owned(decoded),
            Err(e) => {
                self.diagnostics.codec_error(Operation::Decompress, &e);
                Cow::Borrowed(fallback)
            }
        }
    }

    /// Gzip-encode `src` unconditionally.
    pub fn encode(&self, src: &[u8]) -> Result<Vec<u8>> {
        let sink = BoundedSink::new(self.options.max_output_size);
        let mut writer = GzipWriter::with_level(sink, self.options.level);
        writer.write_all(src).map_err(GzError::from_io)?;
        let sink = writer.finish()?;
        Ok(sink.into_inner())
    }

    /// Decode every gzip member in `src`.
    pub fn decode(&self, src: &[u8]) -> Result<Vec<u8>> {
        let mut decoder = MultiGzDecoder::new(src);
        let mut output = Vec::new();

        match self.options.max_output_size {
            Some(limit) => {
                // One extra byte tells "exactly at the limit" from "over it".
                decoder
                    .by_ref()
                    .take((limit as u64).saturating_add(1))
                    .read_to_end(&mut output)?;
                if output.len() > limit {
                    return Err(GzError::output_limit(limit));
                }
            }
            None => {
                decoder.read_to_end(&mut output)?;
            }
        }

        Ok(output)
    }
}

/// In-memory sink that refuses to grow past a limit.
struct BoundedSink {
    buffer: Vec<u8>,
    limit: Option<usize>,
}

impl BoundedSink {
    fn new(limit: Option<usize>) -> Self {
        Self {
            buffer: Vec::new(),
            limit,
        }
    }

    fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl Write for BoundedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(limit) = self.limit {
            if self.buffer.len() + buf.len() > limit {
                return Err(GzError::output_limit(limit).into());
            }
        }
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Gzip `src` with default options, logging failures through `tracing`.
///
/// See [`GzipHelper::compress`].
pub fn compress<'a>(src: &'a [u8], fallback: &'a [u8]) -> Cow<'a, [u8]> {
    GzipHelper::new(HelperOptions::default()).compress(src, fallback)
}

/// Gunzip `src` if needed with default options, logging failures through `tracing`.
///
/// See [`GzipHelper::decompress_if_needed`].
pub fn decompress_if_needed<'a>(src: &'a [u8], fallback: &'a [u8]) -> Cow<'a, [u8]> {
    GzipHelper::new(HelperOptions::default()).decompress_if_needed(src, fallback)
}
