//! The MultiBuf type - an in-memory sequence of chunks.

use bytes::Bytes;

use super::ChunkSource;

/// An owned, ordered list of byte chunks with a read cursor.
///
/// Chunks are yielded in push order. Empty chunks are dropped at push time,
/// so they can never end the sequence early.
///
/// # Example
///
/// ```
/// use blobstore::{ChunkSource, MultiBuf};
///
/// let mut buf = MultiBuf::new();
/// buf.push(&b"ab"[..]);
/// buf.push(&b"cd"[..]);
///
/// assert_eq!(buf.next_chunk(), b"ab");
/// assert_eq!(buf.next_chunk(), b"cd");
/// assert!(buf.next_chunk().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiBuf {
    chunks: Vec<Bytes>,
    pos: usize,
}

impl MultiBuf {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk. Empty chunks are ignored.
    pub fn push(&mut self, chunk: impl Into<Bytes>) {
        let chunk = chunk.into();
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    /// Returns the number of chunks held.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the buffer holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the total number of bytes across all chunks.
    pub fn total_len(&self) -> usize {
        self.chunks.iter().map(Bytes::len).sum()
    }

    /// Returns the number of chunks not yet yielded.
    pub fn remaining(&self) -> usize {
        self.chunks.len() - self.pos
    }

    /// Moves the cursor back to the first chunk.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Returns the chunks in order.
    pub fn chunks(&self) -> &[Bytes] {
        &self.chunks
    }
}

impl ChunkSource for MultiBuf {
    fn next_chunk(&mut self) -> &[u8] {
        match self.chunks.get(self.pos) {
            Some(chunk) => {
                self.pos += 1;
                &chunk[..]
            }
            None => &[],
        }
    }
}

impl From<Vec<Bytes>> for MultiBuf {
    fn from(chunks: Vec<Bytes>) -> Self {
        chunks.into_iter().collect()
    }
}

impl From<Vec<Vec<u8>>> for MultiBuf {
    fn from(chunks: Vec<Vec<u8>>) -> Self {
        chunks.into_iter().collect()
    }
}

impl<T: Into<Bytes>> FromIterator<T> for MultiBuf {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        for chunk in iter {
            buf.push(chunk);
        }
        buf
    }
}

impl<T: Into<Bytes>> Extend<T> for MultiBuf {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for chunk in iter {
            self.push(chunk);
        }
    }
}
