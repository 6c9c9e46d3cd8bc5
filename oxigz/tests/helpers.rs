//! Behavior of the public helpers against independently produced gzip data.

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use oxigz::{
    CompressionLevel, GzError, GzipHelper, GzipWriter, HelperOptions, Operation, compress,
    decompress_if_needed, is_gzip, wrap_if_gzip,
};
use proptest::prelude::*;
use std::cell::RefCell;
use std::io::{Cursor, Read, Write};

const FALLBACK: &[u8] = b"<fallback>";

fn reference_gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn reference_gunzip(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}

#[test]
fn test_is_gzip_boundaries() {
    assert!(!is_gzip(&[]));
    assert!(!is_gzip(&[0x1F]));
    assert!(is_gzip(&[0x1F, 0x8B]));
    assert!(!is_gzip(&[0x1F, 0x00]));
}

#[test]
fn test_decompress_foreign_gzip() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let foreign = reference_gzip(text.as_bytes());
    assert_eq!(
        decompress_if_needed(&foreign, FALLBACK).as_ref(),
        text.as_bytes()
    );
}

#[test]
fn test_foreign_reader_accepts_output() {
    let text = b"read back by an independent decoder";
    let ours = compress(text, FALLBACK);
    assert_eq!(reference_gunzip(&ours), text);

    let mut writer = GzipWriter::best_speed(Vec::new());
    writer.write_all(text).unwrap();
    let fast = writer.finish().unwrap();
    assert_eq!(reference_gunzip(&fast), text);
}

#[test]
fn test_stream_hello() {
    let mut reader = wrap_if_gzip(Cursor::new(reference_gzip(b"hello"))).unwrap();
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, "hello");
}

#[test]
fn test_stream_single_byte_not_consumed() {
    let mut reader = wrap_if_gzip(Cursor::new(vec![0x42u8])).unwrap();
    assert!(!reader.is_gzip());
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte).unwrap();
    assert_eq!(byte[0], 0x42);
}

#[test]
fn test_stream_plain_hello() {
    let mut reader = wrap_if_gzip(Cursor::new(b"hello".to_vec())).unwrap();
    assert!(!reader.is_gzip());
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, "hello");
}

#[test]
fn test_encoder_failure_returns_exact_fallback() {
    let reports = RefCell::new(Vec::new());
    let helper = GzipHelper::with_diagnostics(
        HelperOptions::best_speed().with_max_output_size(0),
        |operation: Operation, error: &GzError| {
            reports.borrow_mut().push((operation, error.to_string()))
        },
    );

    let out = helper.compress(b"anything", FALLBACK);
    assert_eq!(out.as_ref(), FALLBACK);
    assert_eq!(out.as_ptr(), FALLBACK.as_ptr());

    let reports = reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, Operation::Compress);
}

#[test]
fn test_levels_produce_valid_streams() {
    let data = b"level sweep ".repeat(100);
    for level in 0..=9u8 {
        let helper = GzipHelper::new(HelperOptions::new().with_level(level));
        let compressed = helper.compress(&data, FALLBACK);
        assert_eq!(reference_gunzip(&compressed), data, "level {level}");
    }
    assert_eq!(
        GzipHelper::new(HelperOptions::new().with_level(CompressionLevel::NONE))
            .options()
            .level
            .level(),
        0
    );
}

proptest! {
    #[test]
    fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        prop_assume!(!is_gzip(&data));
        let compressed = compress(&data, b"f1");
        let restored = decompress_if_needed(&compressed, b"f2");
        prop_assert_eq!(restored.as_ref(), data.as_slice());
    }

    #[test]
    fn prop_compress_idempotent(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assume!(!is_gzip(&data));
        let once = compress(&data, FALLBACK).into_owned();
        let twice = compress(&once, FALLBACK);
        prop_assert_eq!(twice.as_ref(), once.as_slice());
    }

    #[test]
    fn prop_stream_matches_bytes(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        prop_assume!(!is_gzip(&data));
        let compressed = compress(&data, FALLBACK).into_owned();

        let mut out = Vec::new();
        wrap_if_gzip(&compressed[..]).unwrap().read_to_end(&mut out).unwrap();
        prop_assert_eq!(&out, &data);

        let mut plain = Vec::new();
        wrap_if_gzip(&data[..]).unwrap().read_to_end(&mut plain).unwrap();
        prop_assert_eq!(&plain, &data);
    }
}
