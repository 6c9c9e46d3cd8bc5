//! Transparent gunzip for readers.
//!
//! The first bytes of the stream are peeked through a mark/reset cycle, so
//! the caller still sees them whether or not the stream turns out to be
//! gzip-encoded. Unlike the byte helpers, I/O errors hit while peeking are
//! returned: a stream left at an unknown position cannot be safely used.

use flate2::read::MultiGzDecoder;
use oxigz_core::error::{GzError, Result};
use oxigz_core::{Lookahead, Rewind, is_gzip};
use std::io::{self, Read};
use tracing::trace;

/// Number of leading bytes inspected.
pub const PROBE_LEN: usize = 3;

/// Read limit requested when marking the stream.
pub const MARK_LIMIT: usize = 5;

/// A reader that either passes bytes through or gunzips them on the fly.
#[derive(Debug)]
pub enum GzipOrPlain<R: Read> {
    /// Stream did not look gzip-encoded.
    Plain(R),
    /// Stream is decoded as it is read (all gzip members).
    Gzip(MultiGzDecoder<R>),
}

impl<R: Read> GzipOrPlain<R> {
    /// Whether reads are being decoded.
    pub fn is_gzip(&self) -> bool {
        matches!(self, Self::Gzip(_))
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        match self {
            Self::Plain(reader) => reader,
            Self::Gzip(decoder) => decoder.get_ref(),
        }
    }

    /// Unwrap the underlying reader.
    ///
    /// For a gzip stream, data already buffered by the decoder is lost.
    pub fn into_inner(self) -> R {
        match self {
            Self::Plain(reader) => reader,
            Self::Gzip(decoder) => decoder.into_inner(),
        }
    }
}

impl<R: Read> Read for GzipOrPlain<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Plain(reader) => reader.read(buf),
            Self::Gzip(decoder) => decoder.read(buf),
        }
    }
}

/// Wrap `reader` in a gunzipping reader if its data starts with the gzip magic.
///
/// The reader is first given mark/reset support with a [`Lookahead`] adapter.
/// Use [`wrap_rewindable_if_gzip`] for readers that can already rewind.
pub fn wrap_if_gzip<R: Read>(reader: R) -> Result<GzipOrPlain<Lookahead<R>>> {
    wrap_rewindable_if_gzip(Lookahead::new(reader))
}

/// Wrap a rewindable `reader` in a gunzipping reader if its data starts with
/// the gzip magic.
///
/// Streams shorter than [`PROBE_LEN`] bytes are returned as plain.
pub fn wrap_rewindable_if_gzip<R: Rewind>(mut reader: R) -> Result<GzipOrPlain<R>> {
    let mark = reader.mark(MARK_LIMIT).map_err(GzError::from_io)?;
    let mut probe = [0u8; PROBE_LEN];
    let read = read_probe(&mut reader, &mut probe)?;
    reader.reset(mark).map_err(GzError::from_io)?;

    if read < PROBE_LEN {
        trace!(read, "stream too short to sniff, passing through");
        return Ok(GzipOrPlain::Plain(reader));
    }

    if is_gzip(&probe) {
        trace!("gzip magic found, decoding stream");
        Ok(GzipOrPlain::Gzip(MultiGzDecoder::new(reader)))
    } else {
        Ok(GzipOrPlain::Plain(reader))
    }
}

/// Fill `probe` as far as the stream allows.
fn read_probe<R: Read>(reader: &mut R, probe: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < probe.len() {
        match reader.read(&mut probe[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(GzError::from_io(e)),
        }
    }
    Ok(filled)
}
