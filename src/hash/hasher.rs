//! Incremental blob hashing over the configured algorithm.

use xxhash_rust::xxh64::{Xxh64, xxh64};

use crate::blob::BlobId;
use crate::config::{ClientConfig, HashAlgorithm};

/// A hasher that computes blob ids.
///
/// Feeding the content in several `update` calls gives the same id as
/// hashing the concatenation in one shot.
#[derive(Clone)]
pub struct BlobHasher {
    state: State,
}

#[derive(Clone)]
enum State {
    Xxh64 { hasher: Xxh64, seed: u64 },
    #[cfg(feature = "hash-blake3")]
    Blake3(Box<blake3::Hasher>),
}

impl BlobHasher {
    /// Creates a new hasher for the given configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let state = match config.algorithm() {
            HashAlgorithm::Xxh64 => State::Xxh64 {
                hasher: Xxh64::new(config.seed()),
                seed: config.seed(),
            },
            #[cfg(feature = "hash-blake3")]
            HashAlgorithm::Blake3 => State::Blake3(Box::new(blake3::Hasher::new())),
        };
        Self { state }
    }

    /// Updates the hasher with more data.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            State::Xxh64 { hasher, .. } => hasher.update(data),
            #[cfg(feature = "hash-blake3")]
            State::Blake3(hasher) => {
                hasher.update(data);
            }
        }
    }

    /// Finalizes and returns the id.
    pub fn finalize(&self) -> BlobId {
        match &self.state {
            State::Xxh64 { hasher, .. } => BlobId::new(hasher.digest()),
            #[cfg(feature = "hash-blake3")]
            State::Blake3(hasher) => blake3_id(&hasher.finalize()),
        }
    }

    /// Resets the hasher to its initial state.
    pub fn reset(&mut self) {
        match &mut self.state {
            State::Xxh64 { hasher, seed } => hasher.reset(*seed),
            #[cfg(feature = "hash-blake3")]
            State::Blake3(hasher) => {
                hasher.reset();
            }
        }
    }

    /// Convenience method to hash data in one shot.
    pub fn hash(config: &ClientConfig, data: &[u8]) -> BlobId {
        match config.algorithm() {
            HashAlgorithm::Xxh64 => BlobId::new(xxh64(data, config.seed())),
            #[cfg(feature = "hash-blake3")]
            HashAlgorithm::Blake3 => blake3_id(&blake3::hash(data)),
        }
    }
}

impl std::fmt::Debug for BlobHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let algorithm = match &self.state {
            State::Xxh64 { .. } => HashAlgorithm::Xxh64,
            #[cfg(feature = "hash-blake3")]
            State::Blake3(_) => HashAlgorithm::Blake3,
        };
        f.debug_struct("BlobHasher")
            .field("algorithm", &algorithm)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "hash-blake3")]
fn blake3_id(digest: &blake3::Hash) -> BlobId {
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    BlobId::new(u64::from_le_bytes(prefix))
}
