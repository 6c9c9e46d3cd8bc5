//! Configuration for the byte helpers.

use oxigz_core::CompressionLevel;

/// Options used by [`GzipHelper`](crate::GzipHelper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HelperOptions {
    /// Encoder compression level.
    pub level: CompressionLevel,
    /// Upper bound on the size of a produced buffer, compressed or not.
    ///
    /// `None` means unbounded. Exceeding the bound is treated like any other
    /// codec failure: the fallback is returned.
    pub max_output_size: Option<usize>,
}

impl HelperOptions {
    /// Default level, no output bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fastest compression level, no output bound.
    pub fn best_speed() -> Self {
        Self::new().with_level(CompressionLevel::FAST)
    }

    /// Set the compression level.
    pub fn with_level(mut self, level: impl Into<CompressionLevel>) -> Self {
        self.level = level.into();
        self
    }

    /// Bound the size of produced buffers.
    pub fn with_max_output_size(mut self, limit: usize) -> Self {
        self.max_output_size = Some(limit);
        self
    }
}
