use once_cell::sync::Lazy;
use tracing::info;

use crate::engine::errors::DecompressError;

use super::legacy::LegacyInflate;
use super::managed::ManagedInflate;
#[cfg(feature = "native-deflate")]
use super::native::NativeDeflate;

/// The inflate implementations this crate can route a request to, from
/// fastest to weakest. `ManagedLegacy` is always constructible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    NativeLibrary,
    ManagedOutputBuffer,
    ManagedLegacy,
}

pub trait InflateBackend {
    fn kind(&self) -> BackendKind;

    /// Whether the backend can write into a caller-supplied output buffer.
    fn supports_caller_output(&self) -> bool;

    /// Inflate `input` into `out`, returning the number of bytes written.
    fn inflate_into(&mut self, input: &[u8], out: &mut [u8])
    -> Result<usize, DecompressError>;

    /// Inflate `input` into a buffer the backend allocates itself;
    /// `expected_len` is a capacity hint, not a guarantee.
    fn inflate_alloc(
        &mut self,
        input: &[u8],
        expected_len: usize,
    ) -> Result<Vec<u8>, DecompressError>;

    /// Inflate a blob whose final size is unknown, growing the output until
    /// the stream is fully consumed.
    fn inflate_unsized(&mut self, input: &[u8]) -> Result<Vec<u8>, DecompressError>;
}

static RESOLVED: Lazy<BackendKind> = Lazy::new(|| {
    let kind = detect();
    info!(backend = ?kind, "inflate backend resolved");
    kind
});

/// Backend kind for this process, detected once and cached.
pub fn resolved_backend() -> BackendKind {
    *RESOLVED
}

fn detect() -> BackendKind {
    #[cfg(feature = "native-deflate")]
    if NativeDeflate::available() {
        return BackendKind::NativeLibrary;
    }
    if ManagedInflate::supports_caller_output_buffer() {
        return BackendKind::ManagedOutputBuffer;
    }
    BackendKind::ManagedLegacy
}

pub fn new_backend(kind: BackendKind) -> Result<Box<dyn InflateBackend>, DecompressError> {
    match kind {
        #[cfg(feature = "native-deflate")]
        BackendKind::NativeLibrary => Ok(Box::new(NativeDeflate::new())),
        #[cfg(not(feature = "native-deflate"))]
        BackendKind::NativeLibrary => Err(DecompressError::UnsupportedBackend),
        BackendKind::ManagedOutputBuffer => Ok(Box::new(ManagedInflate::new())),
        BackendKind::ManagedLegacy => Ok(Box::new(LegacyInflate::new())),
    }
}

/// Backend for the process-wide resolved kind. Detection is a performance
/// choice, not a correctness gate: any failure falls back to the legacy path.
pub fn default_backend() -> Box<dyn InflateBackend> {
    new_backend(resolved_backend()).unwrap_or_else(|_| Box::new(LegacyInflate::new()))
}
