//! GZIP magic-number sniffing.
//!
//! Detection only looks at the two leading magic bytes (RFC 1952 ID1/ID2).
//! It does not validate the rest of the header, so raw data that happens to
//! begin with `0x1F 0x8B` is reported as gzip.

/// GZIP magic bytes.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Check whether `data` starts with the gzip magic number.
///
/// Returns `false` for inputs shorter than two bytes.
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= GZIP_MAGIC.len() && data[..GZIP_MAGIC.len()] == GZIP_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_magic() {
        assert_eq!(GZIP_MAGIC, [0x1F, 0x8B]);
    }

    #[test]
    fn test_detect_gzip() {
        assert!(is_gzip(&[0x1F, 0x8B]));
        assert!(is_gzip(&[0x1F, 0x8B, 0x08, 0x00]));
    }

    #[test]
    fn test_detect_short() {
        assert!(!is_gzip(&[]));
        assert!(!is_gzip(&[0x1F]));
    }

    #[test]
    fn test_detect_wrong_magic() {
        assert!(!is_gzip(&[0x1F, 0x00]));
        assert!(!is_gzip(&[0x8B, 0x1F]));
        assert!(!is_gzip(b"PK\x03\x04"));
    }

    #[test]
    fn test_detect_false_positive() {
        // Not gzip, but carries the magic: the heuristic accepts it.
        assert!(is_gzip(&[0x1F, 0x8B, b'h', b'i']));
    }
}
