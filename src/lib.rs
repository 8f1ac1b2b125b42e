//! blobstore
//!
//! A small blobstore client for multi-chunk buffers.
//!
//! `blobstore` drains a chunk source, concatenates the chunks in order and
//! returns a stable 64-bit [`BlobId`] for the content. It is the Rust half of
//! a cross-language bridge:
//!
//! - [`ChunkSource`] - pull interface implemented by whatever owns the chunks
//! - [`MultiBuf`] - in-memory sequence of chunks
//! - [`BlobstoreClient`] - stateless `put`
//! - C++ bindings for both via `cxx` (feature = "ffi")
//!
//! The crate intentionally:
//! - does NOT persist blobs
//! - does NOT manage concurrency
//! - does NOT promise collision resistance
//!
//! It only does one thing: **Chunks in → blob id out**
//!
//! # Example
//!
//! ```
//! use blobstore::{BlobstoreClient, MultiBuf};
//!
//! let client = BlobstoreClient::new();
//!
//! let mut buf: MultiBuf = ["ab", "cd"].into_iter().collect();
//! let id = client.put(&mut buf);
//!
//! assert_eq!(id, client.put_bytes(b"abcd"));
//! println!("blob {}", id);
//! ```
//!
//! # Readers
//!
//! ```no_run
//! use std::fs::File;
//! use blobstore::{BlobstoreClient, BlobError};
//!
//! fn main() -> Result<(), BlobError> {
//!     let file = File::open("data.bin")?;
//!     let id = BlobstoreClient::new().put_reader(file)?;
//!     println!("blob {}", id);
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]
#![warn(missing_docs)]

mod blob;
mod client;
mod config;
mod error;
mod source;

mod buffer; // internal (thread-local reuse)
mod hash;

#[cfg(feature = "ffi")]
mod ffi;

//
// Public surface
//

pub use blob::BlobId;
pub use client::{BlobstoreClient, new_blobstore_client};
pub use config::{ClientConfig, DEFAULT_READ_SIZE, HashAlgorithm, MAX_READ_SIZE};
pub use error::BlobError;
pub use hash::BlobHasher;
pub use source::{ChunkSource, IterSource, MultiBuf, ReaderSource};
