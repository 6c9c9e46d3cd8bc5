//! Bounded lookahead adapter adding mark/reset to any reader.
//!
//! Bytes are only recorded while a mark is active, and only up to the read
//! limit given to [`Rewind::mark`]. Reading past the limit drops the mark and
//! the recording, so the adapter never holds more than the requested window.

use crate::error::GzError;
use crate::traits::Rewind;
use std::io::{self, Read};

/// A reader wrapper that can replay bytes read since the last mark.
///
/// Downstream reads see exactly the bytes and EOF of the inner reader.
#[derive(Debug)]
pub struct Lookahead<R> {
    /// Underlying reader.
    inner: R,
    /// Bytes read from `inner` since the mark.
    buffer: Vec<u8>,
    /// Replay position in `buffer`; equal to its length when nothing is pending.
    position: usize,
    /// Read limit of the active mark.
    limit: Option<usize>,
}

impl<R: Read> Lookahead<R> {
    /// Wrap a reader. No mark is set.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            position: 0,
            limit: None,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Get a mutable reference to the underlying reader.
    ///
    /// Reading from it directly bypasses the recording.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Bytes that will be replayed before the inner reader is consulted again.
    pub fn pending(&self) -> &[u8] {
        &self.buffer[self.position..]
    }

    /// Whether a mark is currently valid.
    pub fn is_marked(&self) -> bool {
        self.limit.is_some()
    }

    /// Unwrap into the inner reader and the bytes not yet replayed.
    pub fn into_parts(mut self) -> (R, Vec<u8>) {
        let pending = self.buffer.split_off(self.position);
        (self.inner, pending)
    }

    fn invalidate(&mut self) {
        self.limit = None;
        self.buffer.clear();
        self.position = 0;
    }
}

impl<R: Read> Read for Lookahead<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        // Replay first
        if self.position < self.buffer.len() {
            let n = (self.buffer.len() - self.position).min(buf.len());
            buf[..n].copy_from_slice(&self.buffer[self.position..self.position + n]);
            self.position += n;
            return Ok(n);
        }

        let n = self.inner.read(buf)?;
        if let Some(limit) = self.limit {
            if self.buffer.len() + n <= limit {
                self.buffer.extend_from_slice(&buf[..n]);
                self.position = self.buffer.len();
            } else {
                self.invalidate();
            }
        }
        Ok(n)
    }
}

impl<R: Read> Rewind for Lookahead<R> {
    type Mark = ();

    fn mark(&mut self, read_limit: usize) -> io::Result<()> {
        // Keep only bytes that have not been replayed yet.
        self.buffer.drain(..self.position);
        self.position = 0;
        self.limit = Some(read_limit.max(self.buffer.len()));
        Ok(())
    }

    fn reset(&mut self, _mark: ()) -> io::Result<()> {
        match self.limit {
            Some(_) => {
                self.position = 0;
                Ok(())
            }
            None => Err(GzError::invalid_mark("mark not set or read limit exceeded").into()),
        }
    }
}
