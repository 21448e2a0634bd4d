use crate::engine::errors::DecompressError;

use super::backend::{BackendKind, InflateBackend};

/// Fastest path: raw deflate through the libdeflate C library.
///
/// The native decompressor context is owned by this value and reused across
/// calls; `libdeflater::Decompressor` frees its native allocation in `Drop`,
/// so every exit path releases it and freeing it twice is impossible.
pub struct NativeDeflate {
    raw: libdeflater::Decompressor,
}

impl NativeDeflate {
    pub fn new() -> Self {
        Self {
            raw: libdeflater::Decompressor::new(),
        }
    }

    /// Whether the libdeflate bindings are linked into this build. Kept as
    /// an explicit query so backend selection reads the same for all three
    /// implementations.
    pub fn available() -> bool {
        true
    }
}

impl InflateBackend for NativeDeflate {
    fn kind(&self) -> BackendKind {
        BackendKind::NativeLibrary
    }

    fn supports_caller_output(&self) -> bool {
        true
    }

    fn inflate_into(
        &mut self,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<usize, DecompressError> {
        self.raw
            .deflate_decompress(input, out)
            .map_err(|e| DecompressError::Inflate(e.to_string()))
    }

    fn inflate_alloc(
        &mut self,
        input: &[u8],
        expected_len: usize,
    ) -> Result<Vec<u8>, DecompressError> {
        let mut out = vec![0u8; expected_len];
        let written = self.inflate_into(input, &mut out)?;
        out.truncate(written);
        Ok(out)
    }

    fn inflate_unsized(&mut self, input: &[u8]) -> Result<Vec<u8>, DecompressError> {
        // libdeflate is one-shot: retry with a doubled buffer until the
        // whole stream fits.
        let mut out = vec![0u8; input.len().max(256) * 4];
        loop {
            match self.raw.deflate_decompress(input, &mut out) {
                Ok(written) => {
                    out.truncate(written);
                    return Ok(out);
                }
                Err(libdeflater::DecompressionError::InsufficientSpace) => {
                    let doubled = out.len() * 2;
                    out.resize(doubled, 0);
                }
                Err(e) => return Err(DecompressError::Inflate(e.to_string())),
            }
        }
    }
}
