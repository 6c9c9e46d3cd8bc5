//! Core traits and configuration values shared by the OxiGz helpers.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};

/// A reader that can mark its position, read ahead, and rewind to the mark.
///
/// Readers without this capability can be given it by wrapping them in
/// [`Lookahead`](crate::lookahead::Lookahead).
pub trait Rewind: Read {
    /// Token identifying a marked position.
    type Mark;

    /// Mark the current position.
    ///
    /// At most `read_limit` bytes may be read before [`reset`](Self::reset)
    /// is guaranteed to succeed. Seekable readers ignore the limit.
    fn mark(&mut self, read_limit: usize) -> io::Result<Self::Mark>;

    /// Rewind to a position previously returned by [`mark`](Self::mark).
    fn reset(&mut self, mark: Self::Mark) -> io::Result<()>;
}

impl<T: Rewind + ?Sized> Rewind for &mut T {
    type Mark = T::Mark;

    fn mark(&mut self, read_limit: usize) -> io::Result<Self::Mark> {
        (**self).mark(read_limit)
    }

    fn reset(&mut self, mark: Self::Mark) -> io::Result<()> {
        (**self).reset(mark)
    }
}

macro_rules! seekable_rewind {
    () => {
        type Mark = u64;

        fn mark(&mut self, _read_limit: usize) -> io::Result<u64> {
            self.stream_position()
        }

        fn reset(&mut self, mark: u64) -> io::Result<()> {
            self.seek(SeekFrom::Start(mark)).map(|_| ())
        }
    };
}

impl<T: AsRef<[u8]>> Rewind for Cursor<T> {
    seekable_rewind!();
}

impl Rewind for File {
    seekable_rewind!();
}

impl<R: Read + Seek> Rewind for BufReader<R> {
    seekable_rewind!();
}

/// Compression level for the gzip encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// No compression (store only).
    pub const NONE: Self = Self(0);
    /// Fastest compression, lowest ratio.
    pub const FAST: Self = Self(1);
    /// Default compression (balanced).
    pub const DEFAULT: Self = Self(6);
    /// Best compression (slowest).
    pub const BEST: Self = Self(9);

    /// Create a custom compression level (0-9).
    pub fn new(level: u8) -> Self {
        Self(level.min(9))
    }

    /// Get the level value.
    pub fn level(&self) -> u8 {
        self.0
    }

    /// Whether this is the fastest level that still compresses.
    pub fn is_fast(&self) -> bool {
        *self == Self::FAST
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for CompressionLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<CompressionLevel> for u8 {
    fn from(level: CompressionLevel) -> Self {
        level.0
    }
}
