//! Iterator-backed chunk source.

use bytes::Bytes;

use super::ChunkSource;

/// A chunk source that pulls chunks from an iterator.
///
/// Empty items are skipped; the source reports exhaustion once the iterator
/// returns `None`. The iterator is not polled again after that.
///
/// # Example
///
/// ```
/// use blobstore::{BlobstoreClient, IterSource};
///
/// let client = BlobstoreClient::new();
/// let mut source = IterSource::new(vec!["ab", "cd"]);
///
/// assert_eq!(client.put(&mut source), client.put_bytes(b"abcd"));
/// ```
#[derive(Debug)]
pub struct IterSource<I> {
    iter: I,
    current: Bytes,
    finished: bool,
}

impl<I> IterSource<I>
where
    I: Iterator,
    I::Item: Into<Bytes>,
{
    /// Creates a source from anything iterable.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            current: Bytes::new(),
            finished: false,
        }
    }

    /// Consumes the source and returns the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I> ChunkSource for IterSource<I>
where
    I: Iterator,
    I::Item: Into<Bytes>,
{
    fn next_chunk(&mut self) -> &[u8] {
        if !self.finished {
            for item in self.iter.by_ref() {
                let chunk = item.into();
                if !chunk.is_empty() {
                    self.current = chunk;
                    return &self.current;
                }
            }
            self.finished = true;
        }
        self.current = Bytes::new();
        &[]
    }
}
