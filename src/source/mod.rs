//! Chunk sources consumed by the client.
//!
//! - [`ChunkSource`] - Pull interface: next chunk, empty when exhausted
//! - [`MultiBuf`] - Owned, ordered list of chunks with a read cursor
//! - [`IterSource`] - Adapts any iterator of byte buffers
//! - [`ReaderSource`] - Adapts a [`std::io::Read`] with fixed-size reads

mod iter;
mod multibuf;
mod reader;

pub use iter::IterSource;
pub use multibuf::MultiBuf;
pub use reader::ReaderSource;

/// A sequence of byte chunks pulled one at a time.
///
/// `next_chunk` returns the chunks in order and then a zero-length slice,
/// which marks the end of the sequence. Consumers stop at the first empty
/// chunk and do not call `next_chunk` again for the same pass.
///
/// # Example
///
/// ```
/// use blobstore::ChunkSource;
///
/// struct Countdown(u8);
///
/// impl ChunkSource for Countdown {
///     fn next_chunk(&mut self) -> &[u8] {
///         if self.0 == 0 {
///             return &[];
///         }
///         self.0 -= 1;
///         b"tick"
///     }
/// }
///
/// let mut source = Countdown(2);
/// assert_eq!(source.next_chunk(), b"tick");
/// assert_eq!(source.next_chunk(), b"tick");
/// assert!(source.next_chunk().is_empty());
/// ```
pub trait ChunkSource {
    /// Returns the next chunk, or an empty slice once the source is exhausted.
    fn next_chunk(&mut self) -> &[u8];
}

impl<S: ChunkSource + ?Sized> ChunkSource for &mut S {
    fn next_chunk(&mut self) -> &[u8] {
        (**self).next_chunk()
    }
}

impl<S: ChunkSource + ?Sized> ChunkSource for Box<S> {
    fn next_chunk(&mut self) -> &[u8] {
        (**self).next_chunk()
    }
}
