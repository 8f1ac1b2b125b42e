//! Reader-backed chunk source.

use std::io::{self, Read};

use crate::buffer::Buffer;
use crate::config::{DEFAULT_READ_SIZE, MAX_READ_SIZE};

use super::ChunkSource;

/// A chunk source that reads fixed-size chunks from a [`std::io::Read`].
///
/// Each call to `next_chunk` performs one successful read of up to
/// `read_size` bytes into a pooled buffer. `Interrupted` reads are retried.
/// Any other I/O error ends the sequence: the source yields an empty chunk
/// and keeps the error for [`ReaderSource::take_error`].
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buffer: Buffer,
    read_size: usize,
    bytes_read: u64,
    error: Option<io::Error>,
    finished: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Creates a source reading [`DEFAULT_READ_SIZE`] bytes per chunk.
    pub fn new(reader: R) -> Self {
        Self::with_read_size(reader, DEFAULT_READ_SIZE)
    }

    /// Creates a source reading up to `read_size` bytes per chunk.
    ///
    /// `read_size` is clamped to `1..=MAX_READ_SIZE`.
    pub fn with_read_size(reader: R, read_size: usize) -> Self {
        Self {
            reader,
            buffer: Buffer::take(),
            read_size: read_size.clamp(1, MAX_READ_SIZE),
            bytes_read: 0,
            error: None,
            finished: false,
        }
    }

    /// Returns the number of bytes yielded so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Returns true if the source hit end of stream or an error.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Takes the I/O error that ended the sequence, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consumes the source and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ChunkSource for ReaderSource<R> {
    fn next_chunk(&mut self) -> &[u8] {
        if self.finished {
            return &[];
        }

        self.buffer.resize(self.read_size);
        loop {
            match self.reader.read(self.buffer.as_mut_slice()) {
                Ok(0) => {
                    self.finished = true;
                    return &[];
                }
                Ok(n) => {
                    self.bytes_read += n as u64;
                    return &self.buffer.as_slice()[..n];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        bytes_read = self.bytes_read,
                        "reader source stopped on i/o error"
                    );
                    self.error = Some(e);
                    self.finished = true;
                    return &[];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FailAfter {
        data: Cursor<Vec<u8>>,
        interrupted: bool,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "retry"));
            }
            match self.data.read(buf)? {
                0 => Err(io::Error::other("disk on fire")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_reads_fixed_size_chunks() {
        let mut source = ReaderSource::with_read_size(Cursor::new(b"abcdefg".to_vec()), 3);
        assert_eq!(source.next_chunk(), b"abc");
        assert_eq!(source.next_chunk(), b"def");
        assert_eq!(source.next_chunk(), b"g");
        assert!(source.next_chunk().is_empty());
        assert!(source.is_finished());
        assert_eq!(source.bytes_read(), 7);
        assert!(source.take_error().is_none());
    }

    #[test]
    fn test_empty_reader() {
        let mut source = ReaderSource::new(io::empty());
        assert!(source.next_chunk().is_empty());
        assert!(source.next_chunk().is_empty());
    }

    #[test]
    fn test_zero_read_size_is_clamped() {
        let mut source = ReaderSource::with_read_size(Cursor::new(b"ab".to_vec()), 0);
        assert_eq!(source.next_chunk(), b"a");
        assert_eq!(source.next_chunk(), b"b");
    }

    #[test]
    fn test_huge_read_size_is_clamped() {
        let mut source = ReaderSource::with_read_size(Cursor::new(b"ab".to_vec()), usize::MAX);
        assert_eq!(source.read_size, MAX_READ_SIZE);
        assert_eq!(source.next_chunk(), b"ab");
        assert!(source.next_chunk().is_empty());
    }

    #[test]
    fn test_error_ends_sequence() {
        let reader = FailAfter {
            data: Cursor::new(b"hi".to_vec()),
            interrupted: false,
        };
        let mut source = ReaderSource::new(reader);

        // Interrupted is retried transparently
        assert_eq!(source.next_chunk(), b"hi");
        assert!(source.next_chunk().is_empty());
        assert!(source.is_finished());

        let err = source.take_error().expect("error should be kept");
        assert_eq!(err.to_string(), "disk on fire");
        assert!(source.take_error().is_none());
    }
}
