/// Physical capacity of each shared scratch buffer.
pub const SCRATCH_CAPACITY: usize = 8192;

/// Reusable scratch storage for one decompression service instance: one
/// buffer for the compressed span read from the source, one for the inflated
/// output. Owned by the service, so interleaved use from two in-flight
/// requests is rejected by the borrow checker rather than corrupting data.
pub struct ScratchPool {
    read: Vec<u8>,
    out: Vec<u8>,
    reuse: bool,
}

/// Storage handed out for one request: either a view of the shared scratch
/// or a fresh allocation sized exactly to the request.
pub enum Slot<'a> {
    Shared(&'a mut [u8]),
    Fresh(Vec<u8>),
}

impl Slot<'_> {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Slot::Shared(s) => s,
            Slot::Fresh(v) => v,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Slot::Shared(s) => s,
            Slot::Fresh(v) => v.as_mut_slice(),
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Slot::Shared(_))
    }
}

impl ScratchPool {
    pub fn new(reuse: bool) -> Self {
        Self {
            read: Vec::with_capacity(SCRATCH_CAPACITY),
            out: Vec::with_capacity(SCRATCH_CAPACITY),
            reuse,
        }
    }

    pub fn reuse_enabled(&self) -> bool {
        self.reuse
    }

    pub fn set_reuse(&mut self, reuse: bool) {
        self.reuse = reuse;
    }

    /// Acquire the read-side and output-side buffers for one request. A slot
    /// is shared only when reuse is enabled and the requested length fits the
    /// fixed capacity; shared slots have their logical length reset before
    /// being handed out.
    pub fn acquire(&mut self, read_len: usize, out_len: usize) -> (Slot<'_>, Slot<'_>) {
        let reuse = self.reuse;
        (
            Self::slot(&mut self.read, read_len, reuse),
            Self::slot(&mut self.out, out_len, reuse),
        )
    }

    fn slot(scratch: &mut Vec<u8>, len: usize, reuse: bool) -> Slot<'_> {
        if reuse && len <= SCRATCH_CAPACITY {
            scratch.clear();
            scratch.resize(len, 0);
            Slot::Shared(&mut scratch[..])
        } else {
            Slot::Fresh(vec![0u8; len])
        }
    }
}

/// One decompressed record.
///
/// `Pooled` borrows the service's shared output scratch and is only valid
/// until the next call on that service; the borrow checker enforces this.
/// Callers that need to retain the bytes across calls use [`RecordBuf::into_vec`].
#[derive(Debug)]
pub enum RecordBuf<'a> {
    Pooled(&'a [u8]),
    Owned(Vec<u8>),
}

impl RecordBuf<'_> {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            RecordBuf::Pooled(s) => s,
            RecordBuf::Owned(v) => v,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_pooled(&self) -> bool {
        matches!(self, RecordBuf::Pooled(_))
    }

    pub fn into_vec(self) -> Vec<u8> {
        match self {
            RecordBuf::Pooled(s) => s.to_vec(),
            RecordBuf::Owned(v) => v,
        }
    }
}

impl std::ops::Deref for RecordBuf<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}
