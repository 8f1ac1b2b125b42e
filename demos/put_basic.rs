//! Basic put example with an in-memory multi-chunk buffer.
//!
//! Run with:
//!     RUST_LOG=blobstore=trace cargo run --example put_basic

use blobstore::{BlobstoreClient, MultiBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = BlobstoreClient::new();

    // Build a buffer from several chunks
    let chunks = ["fearless", " ", "concurrency", " in", " rust"];
    let mut buf: MultiBuf = chunks.into_iter().collect();
    println!(
        "Putting {} chunks ({} bytes)...\n",
        buf.len(),
        buf.total_len()
    );

    let id = client.put(&mut buf);
    println!("blobid = {}", id);

    // The same bytes in one piece give the same id
    let joined = chunks.concat();
    let contiguous = client.put_bytes(joined.as_bytes());
    println!("contiguous = {}", contiguous);
    assert_eq!(id, contiguous);

    // Replaying the buffer is idempotent
    buf.rewind();
    println!("replayed = {}", client.put(&mut buf));

    Ok(())
}
