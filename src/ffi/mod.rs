//! C++ bridge (feature = "ffi").
//!
//! Exposes [`BlobstoreClient`] and [`MultiBuf`] to C++ as opaque Rust types
//! through `cxx`. The build script generates the C++ declarations; C++ code
//! includes `blobstore/src/ffi/mod.rs.h` and sees, in namespace `blobstore`:
//!
//! ```text
//! rust::Box<BlobstoreClient> new_blobstore_client();
//! rust::Box<MultiBuf> new_multibuf();
//! void push_chunk(MultiBuf &buf, rust::Slice<const uint8_t> chunk);
//! rust::Slice<const uint8_t> next_chunk(MultiBuf &buf);
//! uint64_t BlobstoreClient::put(MultiBuf &buf) const;
//! ```
//!
//! Ownership stays with `rust::Box`, so there are no raw handles to leak,
//! double free or pass as null.

use crate::client::{BlobstoreClient, new_blobstore_client};
use crate::source::{ChunkSource, MultiBuf};

#[cxx::bridge(namespace = "blobstore")]
mod bridge {
    extern "Rust" {
        type MultiBuf;
        type BlobstoreClient;

        fn new_blobstore_client() -> Box<BlobstoreClient>;

        fn new_multibuf() -> Box<MultiBuf>;

        fn push_chunk(buf: &mut MultiBuf, chunk: &[u8]);

        fn next_chunk(buf: &mut MultiBuf) -> &[u8];

        #[cxx_name = "put"]
        fn put_multibuf(self: &BlobstoreClient, buf: &mut MultiBuf) -> u64;
    }
}

fn new_multibuf() -> Box<MultiBuf> {
    Box::default()
}

// Copies: the slice is only borrowed for the duration of the call.
fn push_chunk(buf: &mut MultiBuf, chunk: &[u8]) {
    buf.push(chunk.to_vec());
}

fn next_chunk(buf: &mut MultiBuf) -> &[u8] {
    buf.next_chunk()
}

impl BlobstoreClient {
    fn put_multibuf(&self, buf: &mut MultiBuf) -> u64 {
        self.put(buf).as_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::BlobId;

    fn filled(chunks: &[&[u8]]) -> Box<MultiBuf> {
        let mut buf = new_multibuf();
        for chunk in chunks {
            push_chunk(&mut buf, chunk);
        }
        buf
    }

    #[test]
    fn test_client_put_multibuf() {
        let client = new_blobstore_client();
        let mut buf = filled(&[b"ab", b"cd"]);

        let id = client.put_multibuf(&mut buf);
        assert_eq!(id, client.put_bytes(b"abcd").as_u64());
        assert_eq!(id, 0xde03_27b0_d25d_92cc);
    }

    #[test]
    fn test_next_chunk() {
        let mut buf = filled(&[b"x", b"", b"yz"]);

        // Empty pushes are dropped, not treated as end of stream
        assert_eq!(next_chunk(&mut buf), b"x");
        assert_eq!(next_chunk(&mut buf), b"yz");
        assert!(next_chunk(&mut buf).is_empty());
        assert!(next_chunk(&mut buf).is_empty());
    }

    #[test]
    fn test_put_drains_buffer() {
        let client = new_blobstore_client();
        let mut buf = filled(&[b"x"]);

        let first = client.put_multibuf(&mut buf);
        assert_eq!(first, client.put_bytes(b"x").as_u64());

        // Already drained: the second put sees the empty sequence
        let second = client.put_multibuf(&mut buf);
        assert_eq!(BlobId::new(second), client.put_bytes(b""));
    }

    #[test]
    fn test_fresh_buffers_same_id() {
        let client = new_blobstore_client();
        let a = client.put_multibuf(&mut filled(&[b"x"]));
        let b = client.put_multibuf(&mut filled(&[b"x"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_multibuf() {
        let client = new_blobstore_client();
        assert_eq!(client.put_multibuf(&mut new_multibuf()), 0xef46_db37_51d8_e999);
    }
}
