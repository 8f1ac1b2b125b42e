fn main() {
    #[cfg(feature = "ffi")]
    {
        cxx_build::bridge("src/ffi/mod.rs")
            .std("c++14")
            .compile("blobstore-ffi");

        println!("cargo:rerun-if-changed=src/ffi/mod.rs");
    }
}
