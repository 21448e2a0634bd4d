pub mod backend;
pub mod legacy;
pub mod managed;
#[cfg(feature = "native-deflate")]
pub mod native;

pub use backend::{BackendKind, InflateBackend, default_backend, new_backend, resolved_backend};
pub use legacy::LegacyInflate;
pub use managed::ManagedInflate;
#[cfg(feature = "native-deflate")]
pub use native::NativeDeflate;

#[cfg(test)]
mod managed_test;
