//! Streaming SHA1 content fingerprints.
//!
//! The server hashes package files when building manifests and the client
//! hashes downloads when verifying them; both go through this crate so the
//! two sides can never disagree on what the digest of a byte sequence is.

use anyhow::{Context, Result};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read size for streaming hashing. Keeps memory flat regardless of how
/// large a package file is.
const HASH_CHUNK_SIZE: usize = 4096;

/// Compute the SHA1 digest of a file as a lowercase 40-hex string.
///
/// The file is streamed in fixed-size chunks; it is never loaded into
/// memory whole.
pub fn sha1_hex_file(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open file for hashing: {:?}", path))?;
    let mut hasher = Sha1::new();
    let mut buffer = [0u8; HASH_CHUNK_SIZE];

    loop {
        let read = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read file while hashing: {:?}", path))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the SHA1 digest of an in-memory byte slice as lowercase hex.
pub fn sha1_hex(bytes: &[u8]) -> String {
    hex::encode(Sha1::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    #[test]
    fn empty_input_matches_known_vector() {
        assert_eq!(sha1_hex(b""), EMPTY_SHA1);
    }

    #[test]
    fn abc_matches_known_vector() {
        assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn empty_file_matches_known_vector() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(sha1_hex_file(file.path()).unwrap(), EMPTY_SHA1);
    }

    #[test]
    fn file_larger_than_one_chunk_agrees_with_in_memory_digest() {
        let data: Vec<u8> = (0..HASH_CHUNK_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();
        file.flush().unwrap();
        assert_eq!(sha1_hex_file(file.path()).unwrap(), sha1_hex(&data));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(sha1_hex_file(Path::new("does-not-exist.bin")).is_err());
    }
}
