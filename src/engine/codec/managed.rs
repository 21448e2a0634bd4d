use crate::engine::errors::DecompressError;

use super::backend::{BackendKind, InflateBackend};

/// Pure-Rust inflate (miniz_oxide) that writes directly into a
/// caller-supplied output buffer.
pub struct ManagedInflate;

impl ManagedInflate {
    pub fn new() -> Self {
        Self
    }

    pub fn supports_caller_output_buffer() -> bool {
        true
    }
}

impl InflateBackend for ManagedInflate {
    fn kind(&self) -> BackendKind {
        BackendKind::ManagedOutputBuffer
    }

    fn supports_caller_output(&self) -> bool {
        Self::supports_caller_output_buffer()
    }

    fn inflate_into(
        &mut self,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<usize, DecompressError> {
        miniz_oxide::inflate::decompress_slice_iter_to_slice(
            out,
            std::iter::once(input),
            false,
            true,
        )
        .map_err(|e| DecompressError::Inflate(format!("{e:?}")))
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
        miniz_oxide::inflate::decompress_to_vec(input)
            .map_err(|e| DecompressError::Inflate(format!("{e:?}")))
    }
}
