//! The blobstore client.
//!
//! - [`BlobstoreClient`] - Drains a chunk source and returns its [`BlobId`](crate::BlobId)
//! - [`new_blobstore_client`] - Boxed constructor for handle-style callers

mod blobstore;

pub use blobstore::{BlobstoreClient, new_blobstore_client};
