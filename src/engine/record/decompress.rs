use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use crate::engine::codec::{BackendKind, InflateBackend, default_backend, new_backend};
use crate::engine::errors::DecompressError;
use crate::shared::config::CONFIG;

use super::buffer::{RecordBuf, ScratchPool, Slot};

/// Decompresses single records out of an append-only pack file.
///
/// The backend is resolved once per process; the scratch pool is owned by
/// this instance. Sizes passed to [`RecordDecompressor::decompress`] are
/// trusted hints from the container's metadata layer and are only validated
/// as far as the backend's status reveals.
pub struct RecordDecompressor {
    backend: Box<dyn InflateBackend>,
    pool: ScratchPool,
}

impl RecordDecompressor {
    /// Service configured from the process-wide settings.
    pub fn new() -> Self {
        Self {
            backend: default_backend(),
            pool: ScratchPool::new(CONFIG.record.reuse_buffers),
        }
    }

    /// Explicit backend and reuse policy. Callers that re-enter
    /// decompression while holding a previous result (delta-chain
    /// reconstruction) should pass `reuse_buffers = false`.
    pub fn with_options(
        kind: BackendKind,
        reuse_buffers: bool,
    ) -> Result<Self, DecompressError> {
        Ok(Self {
            backend: new_backend(kind)?,
            pool: ScratchPool::new(reuse_buffers),
        })
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn set_reuse_buffers(&mut self, reuse: bool) {
        self.pool.set_reuse(reuse);
    }

    /// Extract one record: read `compressed_len` bytes at `offset` from the
    /// source and inflate them to exactly `uncompressed_len` bytes.
    ///
    /// A pooled result aliases the shared scratch and must be copied out
    /// before the next call on this service.
    pub fn decompress<S: Read + Seek>(
        &mut self,
        source: &mut S,
        offset: u64,
        compressed_len: u32,
        uncompressed_len: u32,
    ) -> Result<RecordBuf<'_>, DecompressError> {
        let comp_len = compressed_len as usize;
        let out_len = uncompressed_len as usize;

        source.seek(SeekFrom::Start(offset))?;

        let (mut read_slot, mut out_slot) = self.pool.acquire(comp_len, out_len);
        source.read_exact(read_slot.as_mut_slice())?;

        debug!(
            offset,
            compressed_len,
            uncompressed_len,
            shared_out = out_slot.is_shared(),
            "decompressing record"
        );

        if self.backend.supports_caller_output() {
            let written = self
                .backend
                .inflate_into(read_slot.as_slice(), out_slot.as_mut_slice())?;
            if written != out_len {
                return Err(DecompressError::SizeMismatch {
                    expected: out_len,
                    actual: written,
                });
            }
            match out_slot {
                Slot::Shared(s) => {
                    let s: &[u8] = s;
                    Ok(RecordBuf::Pooled(&s[..written]))
                }
                Slot::Fresh(v) => Ok(RecordBuf::Owned(v)),
            }
        } else {
            // Legacy backend allocates and returns its own buffer; that
            // buffer is the result.
            let decoded = self.backend.inflate_alloc(read_slot.as_slice(), out_len)?;
            if decoded.len() != out_len {
                return Err(DecompressError::SizeMismatch {
                    expected: out_len,
                    actual: decoded.len(),
                });
            }
            Ok(RecordBuf::Owned(decoded))
        }
    }

    /// Inflate an in-memory blob whose decompressed size is not declared
    /// anywhere; the backend grows the output until end-of-stream.
    pub fn decompress_blob(&mut self, data: &[u8]) -> Result<Vec<u8>, DecompressError> {
        self.backend.inflate_unsized(data)
    }
}
