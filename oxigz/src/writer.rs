//! GZIP encoder with a configurable compression level.

use flate2::Compression;
use flate2::write::GzEncoder;
use oxigz_core::CompressionLevel;
use oxigz_core::error::{GzError, Result};
use std::io::{self, Write};

/// Streaming GZIP writer.
///
/// The trailer (CRC-32 and input size) is only written by
/// [`finish`](Self::finish); callers must finish the writer to produce a
/// complete stream. Dropping an unfinished writer attempts to finish it and
/// ignores errors.
pub struct GzipWriter<W: Write> {
    /// Underlying encoder.
    encoder: GzEncoder<W>,
    /// Level the encoder was built with.
    level: CompressionLevel,
}

impl<W: Write> GzipWriter<W> {
    /// Create a writer at the default compression level.
    pub fn new(sink: W) -> Self {
        Self::with_level(sink, CompressionLevel::DEFAULT)
    }

    /// Create a writer at a specific compression level.
    pub fn with_level(sink: W, level: CompressionLevel) -> Self {
        Self {
            encoder: GzEncoder::new(sink, codec_level(level)),
            level,
        }
    }

    /// Create a writer at the fastest compression level.
    pub fn best_speed(sink: W) -> Self {
        Self::with_level(sink, CompressionLevel::FAST)
    }

    /// Get the compression level.
    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    /// Get a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        self.encoder.get_ref()
    }

    /// Write the trailer and return the sink.
    pub fn finish(self) -> Result<W> {
        self.encoder.finish().map_err(GzError::from_io)
    }
}

impl<W: Write> Write for GzipWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.encoder.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.encoder.flush()
    }
}

fn codec_level(level: CompressionLevel) -> Compression {
    Compression::new(u32::from(level.level()))
}
