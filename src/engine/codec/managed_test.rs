use miniz_oxide::deflate::compress_to_vec;

use crate::engine::codec::backend::{BackendKind, InflateBackend};
use crate::engine::codec::managed::ManagedInflate;
use crate::engine::errors::DecompressError;

#[test]
fn inflates_into_caller_slice() {
    let data = b"managed backend writes into the caller's buffer";
    let comp = compress_to_vec(data, 6);
    let mut backend = ManagedInflate::new();
    let mut out = vec![0u8; data.len()];
    let written = backend.inflate_into(&comp, &mut out).expect("inflate");
    assert_eq!(written, data.len());
    assert_eq!(&out[..], &data[..]);
}

#[test]
fn reports_caller_output_capability() {
    assert!(ManagedInflate::supports_caller_output_buffer());
    let backend = ManagedInflate::new();
    assert_eq!(backend.kind(), BackendKind::ManagedOutputBuffer);
}

#[test]
fn undersized_output_is_an_inflate_error() {
    let data = vec![3u8; 256];
    let comp = compress_to_vec(&data, 6);
    let mut backend = ManagedInflate::new();
    let mut out = vec![0u8; 16];
    assert!(matches!(
        backend.inflate_into(&comp, &mut out),
        Err(DecompressError::Inflate(_))
    ));
}

#[test]
fn unsized_inflate_grows_to_completion() {
    let data = vec![0u8; 100_000];
    let comp = compress_to_vec(&data, 6);
    let mut backend = ManagedInflate::new();
    let out = backend.inflate_unsized(&comp).expect("unsized inflate");
    assert_eq!(out, data);
}

#[test]
fn rejects_reserved_block_type() {
    let mut comp = compress_to_vec(b"x", 6);
    comp[0] |= 0b0000_0110;
    let mut backend = ManagedInflate::new();
    let mut out = vec![0u8; 1];
    assert!(backend.inflate_into(&comp, &mut out).is_err());
}
