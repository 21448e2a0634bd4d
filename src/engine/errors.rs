use std::io;
use thiserror::Error;

/// Errors surfaced by the record decompression service.
#[derive(Debug, Error)]
pub enum DecompressError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("inflate failed: {0}")]
    Inflate(String),

    #[error("decompressed length mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("no inflate backend available")]
    UnsupportedBackend,
}
