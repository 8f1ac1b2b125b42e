//! Internal buffer management.
//!
//! Thread-local pool of byte buffers, reused for the accumulation buffer in
//! `put` and for reader-backed sources. Not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
