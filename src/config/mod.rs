//! Configuration for the blobstore client.
//!
//! - [`ClientConfig`] - Hash algorithm, seed and reader chunk size
//! - [`HashAlgorithm`] - Which stable hash derives the [`BlobId`](crate::BlobId)

use std::fmt;

use crate::error::BlobError;

/// Default number of bytes read per chunk by reader-backed sources (8 KiB).
pub const DEFAULT_READ_SIZE: usize = 8 * 1024;

/// Largest accepted read size (16 MiB).
pub const MAX_READ_SIZE: usize = 16 * 1024 * 1024;

/// Default XXH64 seed.
pub const DEFAULT_SEED: u64 = 0;

/// Hash function used to derive blob ids.
///
/// Both algorithms are stable across processes, platforms and crate versions,
/// so ids may be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// XXH64 over the concatenated content, seeded by [`ClientConfig::seed`].
    #[default]
    Xxh64,

    /// First 8 bytes (little-endian) of the BLAKE3 digest. The seed is ignored.
    #[cfg(feature = "hash-blake3")]
    Blake3,
}

impl HashAlgorithm {
    /// Returns the short lowercase name of the algorithm.
    pub const fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Xxh64 => "xxh64",
            #[cfg(feature = "hash-blake3")]
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Configuration for a [`BlobstoreClient`](crate::BlobstoreClient).
///
/// Constraints: `0 < read_size <= MAX_READ_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientConfig {
    algorithm: HashAlgorithm,
    seed: u64,
    read_size: usize,
}

impl ClientConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if `read_size` is zero or larger than [`MAX_READ_SIZE`].
    pub fn new(algorithm: HashAlgorithm, seed: u64, read_size: usize) -> Result<Self, BlobError> {
        if read_size == 0 {
            return Err(BlobError::InvalidConfig {
                message: "read_size must be non-zero",
            });
        }

        if read_size > MAX_READ_SIZE {
            return Err(BlobError::InvalidConfig {
                message: "read_size cannot exceed 16 MiB",
            });
        }

        Ok(Self {
            algorithm,
            seed,
            read_size,
        })
    }

    /// Sets the hash algorithm.
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the hash seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the reader chunk size.
    pub fn with_read_size(mut self, size: usize) -> Self {
        self.read_size = size;
        self
    }

    /// Returns the hash algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the reader chunk size.
    pub fn read_size(&self) -> usize {
        self.read_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), BlobError> {
        Self::new(self.algorithm, self.seed, self.read_size).map(|_| ())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            seed: DEFAULT_SEED,
            read_size: DEFAULT_READ_SIZE,
        }
    }
}
