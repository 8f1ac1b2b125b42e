//! Error types for blobstore.
//!
//! `put` itself never fails; errors only come from configuration and from
//! reader-backed sources.

use std::fmt;

/// Errors that can occur on the fallible edges of the client.
#[derive(Debug)]
pub enum BlobError {
    /// An I/O error occurred while reading input data.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for BlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobError::Io(e) => write!(f, "io error: {}", e),
            BlobError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for BlobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlobError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BlobError {
    fn from(e: std::io::Error) -> Self {
        BlobError::Io(e)
    }
}
