#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use blobstore::{BlobstoreClient, ClientConfig, HashAlgorithm, MultiBuf};

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, cuts) = input;

    let configs = vec![
        ClientConfig::default(),
        ClientConfig::default().with_seed(0x5eed),
        ClientConfig::default().with_algorithm(HashAlgorithm::Blake3),
    ];

    for config in configs {
        let client = BlobstoreClient::with_config(config).unwrap();
        let expected = client.put_bytes(&data);

        // Split `data` at fuzzer-chosen points
        let mut buf = MultiBuf::new();
        let mut start = 0usize;
        for cut in &cuts {
            if start >= data.len() {
                break;
            }
            let end = (start + *cut as usize).min(data.len());
            buf.push(Bytes::copy_from_slice(&data[start..end]));
            start = end;
        }
        buf.push(Bytes::copy_from_slice(&data[start..]));

        // Verify: total bytes match input
        assert_eq!(buf.total_len(), data.len());

        // Verify: chunking does not change the id
        assert_eq!(client.put(&mut buf), expected);

        // Verify: exhausted buffer hashes as empty, rewind replays
        assert_eq!(client.put(&mut buf), client.put_bytes(b""));
        buf.rewind();
        assert_eq!(client.put(&mut buf), expected);
    }
});
