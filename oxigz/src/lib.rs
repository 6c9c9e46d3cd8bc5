//! # OxiGz
//!
//! Gzip helpers for byte buffers and readers, with magic-number sniffing.
//!
//! - [`bytes`]: best-effort [`compress`] / [`decompress_if_needed`] that return
//!   a caller-supplied fallback instead of an error
//! - [`stream`]: [`wrap_if_gzip`], transparently gunzipping a reader when its
//!   data starts with the gzip magic number
//! - [`writer`]: [`GzipWriter`], a streaming encoder with a configurable level
//!   (including a best-speed variant)
//! - [`diagnostics`]: where swallowed errors are reported
//!
//! ## Example
//!
//! ```rust
//! use oxigz::{compress, decompress_if_needed, is_gzip, wrap_if_gzip};
//! use std::io::Read;
//!
//! let compressed = compress(b"Hello, World!", b"");
//! assert!(is_gzip(&compressed));
//!
//! // Already compressed data is passed through.
//! assert_eq!(compress(&compressed, b""), compressed);
//!
//! let plain = decompress_if_needed(&compressed, b"");
//! assert_eq!(plain.as_ref(), b"Hello, World!");
//!
//! let mut reader = wrap_if_gzip(&compressed[..]).unwrap();
//! let mut text = String::new();
//! reader.read_to_string(&mut text).unwrap();
//! assert_eq!(text, "Hello, World!");
//! ```
//!
//! ## Magic-number heuristic
//!
//! Detection only checks the first two bytes (`0x1F 0x8B`). Uncompressed data
//! that happens to start with them is treated as gzip: `compress` returns it
//! unchanged and `decompress_if_needed` falls back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bytes;
pub mod diagnostics;
pub mod options;
pub mod stream;
pub mod writer;

// Re-exports
pub use bytes::{GzipHelper, compress, decompress_if_needed};
pub use diagnostics::{Diagnostics, NoDiagnostics, Operation, TracingDiagnostics};
pub use options::HelperOptions;
pub use oxigz_core::{CompressionLevel, GZIP_MAGIC, GzError, Lookahead, Result, Rewind, is_gzip};
pub use stream::{GzipOrPlain, wrap_if_gzip, wrap_rewindable_if_gzip};
pub use writer::GzipWriter;
