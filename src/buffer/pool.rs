//! Per-thread pool of byte buffers.
//!
//! Buffers start at the reader chunk size. Buffers that grew past
//! [`RETAIN_LIMIT`] (a large `put` accumulator, say) are freed on drop rather
//! than pinned in the pool.

use std::cell::RefCell;
use std::fmt;
use std::mem;

use crate::config::DEFAULT_READ_SIZE;

/// Capacity of a freshly allocated buffer, sized for one default reader chunk.
pub const POOLED_CAPACITY: usize = DEFAULT_READ_SIZE;

/// Buffers whose capacity exceeds this are not returned to the pool (1 MiB).
pub const RETAIN_LIMIT: usize = 1024 * 1024;

/// Number of idle buffers kept per thread.
pub const MAX_IDLE: usize = 4;

thread_local! {
    static IDLE: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}

/// A byte buffer borrowed from the per-thread pool.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Reuses an idle buffer from this thread, or allocates a new one.
    pub fn take() -> Self {
        let data = IDLE
            .try_with(|idle| idle.borrow_mut().pop())
            .ok()
            .flatten()
            .unwrap_or_else(|| Vec::with_capacity(POOLED_CAPACITY));
        Self { data }
    }

    /// Appends data to the end of the buffer.
    pub fn extend_from_slice(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data);
    }

    /// Resizes the buffer to exactly `len` bytes, zero-filling new space.
    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, 0);
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the buffer contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the buffer contents mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn retainable(&self) -> bool {
        self.data.capacity() <= RETAIN_LIMIT
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if !self.retainable() {
            return;
        }

        let mut data = mem::take(&mut self.data);
        data.clear();
        // The pool may already be gone during thread teardown.
        let _ = IDLE.try_with(|idle| {
            let mut idle = idle.borrow_mut();
            if idle.len() < MAX_IDLE {
                idle.push(data);
            }
        });
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::take()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .finish()
    }
}
