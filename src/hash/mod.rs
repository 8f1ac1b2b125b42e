//! Stable content hashing for blob identity.
//!
//! - [`BlobHasher`] - Incremental hasher producing a [`BlobId`](crate::BlobId)
//!   with the algorithm selected in [`ClientConfig`](crate::ClientConfig)

mod hasher;

pub use hasher::BlobHasher;
