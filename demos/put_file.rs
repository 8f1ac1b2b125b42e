//! File put example.
//!
//! Run with:
//!     cargo run --example put_file -- /path/to/file

use std::env;
use std::fs::File;

use blobstore::{BlobstoreClient, ClientConfig, HashAlgorithm};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Putting file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    // Larger reads for files
    let config = ClientConfig::default().with_read_size(64 * 1024);
    let client = BlobstoreClient::with_config(config)?;
    let id = client.put_reader(file)?;
    println!("{:>7}: {}", config.algorithm(), id);

    #[cfg(feature = "hash-blake3")]
    {
        let client = BlobstoreClient::with_config(config.with_algorithm(HashAlgorithm::Blake3))?;
        let id = client.put_reader(File::open(&path)?)?;
        println!("{:>7}: {}", HashAlgorithm::Blake3, id);
    }

    Ok(())
}
