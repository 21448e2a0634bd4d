use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::engine::errors::DecompressError;

use super::backend::{BackendKind, InflateBackend};

/// Baseline fallback: flate2's reader adapter, which always allocates and
/// returns its own output buffer.
pub struct LegacyInflate;

impl LegacyInflate {
    pub fn new() -> Self {
        Self
    }

    pub fn supports_caller_output_buffer() -> bool {
        false
    }

    fn read_all(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, DecompressError> {
        let mut out = Vec::with_capacity(capacity);
        let mut decoder = DeflateDecoder::new(input);
        // The input is an in-memory slice, so any read error here is a
        // decode failure, not a source-stream fault.
        decoder
            .read_to_end(&mut out)
            .map_err(|e| DecompressError::Inflate(e.to_string()))?;
        Ok(out)
    }
}

impl InflateBackend for LegacyInflate {
    fn kind(&self) -> BackendKind {
        BackendKind::ManagedLegacy
    }

    fn supports_caller_output(&self) -> bool {
        Self::supports_caller_output_buffer()
    }

    fn inflate_into(
        &mut self,
        input: &[u8],
        out: &mut [u8],
    ) -> Result<usize, DecompressError> {
        let decoded = self.read_all(input, out.len())?;
        if decoded.len() > out.len() {
            return Err(DecompressError::Inflate(format!(
                "output of {} bytes exceeds caller buffer of {}",
                decoded.len(),
                out.len()
            )));
        }
        out[..decoded.len()].copy_from_slice(&decoded);
        Ok(decoded.len())
    }

    fn inflate_alloc(
        &mut self,
        input: &[u8],
        expected_len: usize,
    ) -> Result<Vec<u8>, DecompressError> {
        self.read_all(input, expected_len)
    }

    fn inflate_unsized(&mut self, input: &[u8]) -> Result<Vec<u8>, DecompressError> {
        self.read_all(input, 0)
    }
}
