//! Blobstore client - consumes chunk sources and computes blob ids.
//!
//! The client holds only its immutable configuration. A single client can be
//! reused for any number of `put` calls and shared across threads.
//!
//! # Example
//!
//! ```
//! use blobstore::{BlobstoreClient, MultiBuf};
//!
//! let client = BlobstoreClient::new();
//!
//! let mut buf = MultiBuf::new();
//! buf.push(&b"ab"[..]);
//! buf.push(&b"cd"[..]);
//!
//! let id = client.put(&mut buf);
//! assert_eq!(id, client.put_bytes(b"abcd"));
//! ```

use std::io::Read;

use crate::blob::BlobId;
use crate::buffer::Buffer;
use crate::config::ClientConfig;
use crate::error::BlobError;
use crate::hash::BlobHasher;
use crate::source::{ChunkSource, ReaderSource};

/// A client that stores blobs by draining chunk sources.
///
/// `put` never fails: every source, including one that is exhausted from the
/// start, produces an id. Only configuration and reader I/O are fallible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlobstoreClient {
    config: ClientConfig,
}

impl BlobstoreClient {
    /// Creates a client with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use blobstore::BlobstoreClient;
    ///
    /// let client = BlobstoreClient::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client with the given configuration.
    ///
    /// Returns error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use blobstore::{BlobstoreClient, ClientConfig};
    ///
    /// let client = BlobstoreClient::with_config(ClientConfig::default().with_seed(7))?;
    /// assert_eq!(client.config().seed(), 7);
    /// # Ok::<(), blobstore::BlobError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self, BlobError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration used by this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Drains `source` and returns the id of the concatenated content.
    ///
    /// Chunks are pulled until the first empty one; the source is not polled
    /// after that. Chunk order is preserved. The source is only borrowed for
    /// the duration of the call.
    ///
    /// # Example
    ///
    /// ```
    /// use blobstore::{BlobstoreClient, MultiBuf};
    ///
    /// let client = BlobstoreClient::new();
    /// let empty = client.put(&mut MultiBuf::new());
    /// assert_eq!(empty, client.put_bytes(b""));
    /// ```
    pub fn put<S: ChunkSource + ?Sized>(&self, source: &mut S) -> BlobId {
        let mut contents = Buffer::take();
        let mut chunks = 0usize;

        loop {
            let chunk = source.next_chunk();
            if chunk.is_empty() {
                break;
            }
            tracing::trace!(index = chunks, len = chunk.len(), "appending chunk");
            contents.extend_from_slice(chunk);
            chunks += 1;
        }

        let id = BlobHasher::hash(&self.config, contents.as_slice());
        tracing::debug!(
            chunks,
            bytes = contents.len(),
            blob_id = %id,
            algorithm = %self.config.algorithm(),
            "put complete"
        );
        id
    }

    /// Returns the id of a single contiguous buffer.
    ///
    /// Equal to [`BlobstoreClient::put`] over any split of the same bytes.
    pub fn put_bytes(&self, data: &[u8]) -> BlobId {
        BlobHasher::hash(&self.config, data)
    }

    /// Reads `reader` to the end in `read_size` chunks and returns the id.
    ///
    /// Returns [`BlobError::Io`] if the reader fails.
    ///
    /// # Example
    ///
    /// ```
    /// use blobstore::BlobstoreClient;
    /// use std::io::Cursor;
    ///
    /// let client = BlobstoreClient::new();
    /// let id = client.put_reader(Cursor::new(b"abcd"))?;
    /// assert_eq!(id, client.put_bytes(b"abcd"));
    /// # Ok::<(), blobstore::BlobError>(())
    /// ```
    pub fn put_reader<R: Read>(&self, reader: R) -> Result<BlobId, BlobError> {
        let mut source = ReaderSource::with_read_size(reader, self.config.read_size());
        let id = self.put(&mut source);
        match source.take_error() {
            Some(e) => Err(e.into()),
            None => Ok(id),
        }
    }
}

/// Creates a boxed client with the default configuration.
///
/// The C++ bridge hands this box across as `rust::Box<BlobstoreClient>`.
pub fn new_blobstore_client() -> Box<BlobstoreClient> {
    Box::new(BlobstoreClient::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HashAlgorithm;
    use crate::source::MultiBuf;
    use std::io::{self, Cursor};

    /// Source that panics if polled after reporting exhaustion.
    struct Strict {
        chunks: Vec<&'static [u8]>,
        done: bool,
    }

    impl ChunkSource for Strict {
        fn next_chunk(&mut self) -> &[u8] {
            assert!(!self.done, "polled after exhaustion");
            if self.chunks.is_empty() {
                self.done = true;
                return &[];
            }
            self.chunks.remove(0)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn test_put_concatenates_in_order() {
        let client = BlobstoreClient::new();
        let mut source = Strict {
            chunks: vec![&b"ab"[..], &b"cd"[..]],
            done: false,
        };
        assert_eq!(client.put(&mut source), client.put_bytes(b"abcd"));
        assert!(source.done);
    }

    #[test]
    fn test_put_empty_source() {
        let client = BlobstoreClient::new();
        let mut source = Strict {
            chunks: vec![],
            done: false,
        };
        assert_eq!(client.put(&mut source).as_u64(), 0xef46_db37_51d8_e999);
    }

    #[test]
    fn test_put_order_matters() {
        let client = BlobstoreClient::new();
        let ab = client.put(&mut MultiBuf::from_iter(["a", "b"]));
        let ba = client.put(&mut MultiBuf::from_iter(["b", "a"]));
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_put_dyn_source() {
        let client = BlobstoreClient::new();
        let mut buf = MultiBuf::from_iter(["x"]);
        let source: &mut dyn ChunkSource = &mut buf;
        assert_eq!(client.put(source), client.put_bytes(b"x"));
    }

    #[test]
    fn test_client_reused() {
        let client = BlobstoreClient::new();
        let first = client.put(&mut MultiBuf::from_iter(["x"]));
        let second = client.put(&mut MultiBuf::from_iter(["x"]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = ClientConfig::default().with_read_size(0);
        assert!(matches!(
            BlobstoreClient::with_config(config),
            Err(BlobError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_put_uses_configured_seed() {
        let seeded = BlobstoreClient::with_config(ClientConfig::default().with_seed(3)).unwrap();
        let plain = BlobstoreClient::new();
        assert_ne!(seeded.put_bytes(b"abcd"), plain.put_bytes(b"abcd"));
    }

    #[test]
    #[cfg(feature = "hash-blake3")]
    fn test_put_blake3() {
        let config = ClientConfig::default().with_algorithm(HashAlgorithm::Blake3);
        let client = BlobstoreClient::with_config(config).unwrap();
        let id = client.put(&mut MultiBuf::from_iter(["ab", "cd"]));
        assert_eq!(id, BlobHasher::hash(&config, b"abcd"));
        assert_ne!(id, BlobstoreClient::new().put_bytes(b"abcd"));
    }

    #[test]
    fn test_put_reader() {
        let config = ClientConfig::default()
            .with_algorithm(HashAlgorithm::Xxh64)
            .with_read_size(3);
        let client = BlobstoreClient::with_config(config).unwrap();
        let id = client.put_reader(Cursor::new(b"hello world")).unwrap();
        assert_eq!(id, client.put_bytes(b"hello world"));
    }

    #[test]
    fn test_put_reader_error() {
        let client = BlobstoreClient::new();
        let err = client.put_reader(Broken).unwrap_err();
        assert!(matches!(err, BlobError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_new_blobstore_client() {
        let client = new_blobstore_client();
        assert_eq!(*client, BlobstoreClient::new());
    }

    #[test]
    fn test_large_put_exceeds_pool_buffer() {
        let client = BlobstoreClient::new();
        let data: Vec<u8> = (0..300_000).map(|i| (i % 251) as u8).collect();
        let mut buf: MultiBuf = data.chunks(1000).map(|c| c.to_vec()).collect();
        assert_eq!(client.put(&mut buf), client.put_bytes(&data));
    }
}
