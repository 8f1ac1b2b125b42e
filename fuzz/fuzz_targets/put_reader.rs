#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use blobstore::{BlobstoreClient, ClientConfig, ReaderSource};

fuzz_target!(|data: Vec<u8>| {
    for read_size in [1, 3, 64, 8 * 1024] {
        let config = ClientConfig::default().with_read_size(read_size);
        let client = BlobstoreClient::with_config(config).unwrap();

        let id = client.put_reader(Cursor::new(&data)).unwrap();
        assert_eq!(id, client.put_bytes(&data));

        let mut source = ReaderSource::with_read_size(Cursor::new(&data), read_size);
        assert_eq!(client.put(&mut source), id);
        assert_eq!(source.bytes_read(), data.len() as u64);
        assert!(source.take_error().is_none());
    }
});
