//! Blob types.
//!
//! - [`BlobId`] - 64-bit content identifier returned by `put`

mod id;

pub use id::BlobId;
