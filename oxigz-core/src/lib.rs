//! # OxiGz Core
//!
//! Core components for the OxiGz gzip helpers.
//!
//! - [`magic`]: gzip magic-number sniffing
//! - [`traits`]: the [`Rewind`] mark/reset capability and [`CompressionLevel`]
//! - [`lookahead`]: a bounded buffering adapter giving any reader [`Rewind`]
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```rust
//! use oxigz_core::{Lookahead, Rewind, is_gzip};
//! use std::io::Read;
//!
//! let mut reader = Lookahead::new(&[0x1F_u8, 0x8B, 0x08, 0x00][..]);
//! reader.mark(5).unwrap();
//! let mut probe = [0u8; 3];
//! reader.read_exact(&mut probe).unwrap();
//! reader.reset(()).unwrap();
//!
//! assert!(is_gzip(&probe));
//! assert_eq!(reader.pending(), &probe);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod lookahead;
pub mod magic;
pub mod traits;

// Re-exports for convenience
pub use error::{GzError, Result};
pub use lookahead::Lookahead;
pub use magic::{GZIP_MAGIC, is_gzip};
pub use traits::{CompressionLevel, Rewind};
