pub mod buffer;
pub mod decompress;

pub use buffer::{RecordBuf, SCRATCH_CAPACITY, ScratchPool};
pub use decompress::RecordDecompressor;

#[cfg(test)]
mod buffer_test;
