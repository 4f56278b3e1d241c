//! Raw storage backing the vector: the allocator interface and an owning
//! handle to a block of uninitialized element slots.

pub(crate) mod alloc;

pub(crate) mod buffer;

pub(crate) mod utils;

pub use self::alloc::{Global, RawAlloc};

pub(crate) use self::buffer::RawBuffer;
