//! Blob identifier type.

use std::fmt;

/// A 64-bit content identifier for a stored blob.
///
/// This is a thin wrapper around the non-cryptographic hash of the blob's
/// bytes. Two blobs with the same content always get the same id; distinct
/// content may collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlobId(u64);

impl BlobId {
    /// The size of the id in bytes.
    pub const SIZE: usize = 8;

    /// Creates a blob id from a raw hash value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw hash value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the id as big-endian bytes (the order used by [`BlobId::to_hex`]).
    pub const fn to_be_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Returns the id as a 16-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        format!("{:016x}", self.0)
    }

    /// Creates an id from a hex string.
    ///
    /// Returns `None` if the string is not valid hex or not exactly 16 characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != 16 || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u64::from_str_radix(hex_str, 16).ok().map(Self)
    }
}

impl From<u64> for BlobId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<BlobId> for u64 {
    fn from(id: BlobId) -> Self {
        id.0
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id = BlobId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn test_to_hex_is_zero_padded() {
        let id = BlobId::new(0xAB);
        assert_eq!(id.to_hex(), "00000000000000ab");
        assert_eq!(id.to_string(), id.to_hex());
    }

    #[test]
    fn test_from_hex() {
        let id = BlobId::from_hex("ef46db3751d8e999").unwrap();
        assert_eq!(id.as_u64(), 0xef46_db37_51d8_e999);

        // Uppercase is accepted
        assert_eq!(BlobId::from_hex("EF46DB3751D8E999"), Some(id));

        // Wrong length
        assert!(BlobId::from_hex("ef46db3751d8e99").is_none());
        assert!(BlobId::from_hex("ef46db3751d8e9990").is_none());

        // Sign prefix and non-hex
        assert!(BlobId::from_hex("+f46db3751d8e999").is_none());
        assert!(BlobId::from_hex("zz46db3751d8e999").is_none());
    }

    #[test]
    fn test_be_bytes() {
        let id = BlobId::new(0x0102_0304_0506_0708);
        assert_eq!(id.to_be_bytes(), [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
