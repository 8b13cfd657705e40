//! # Content Integrity Hashing
//!
//! SHA-512 digests over full file or message content. The digest travels
//! with the upload (in the clear and encrypted) and is recomputed by the
//! receiver after decryption to verify integrity. It secures the content,
//! not the channel.

use sha2::{Digest, Sha512};

/// Size of a content digest in bytes (512 bits)
pub const DIGEST_SIZE: usize = 64;

/// A SHA-512 digest of file or message content.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentHash([u8; DIGEST_SIZE]);

impl ContentHash {
    /// Hex rendering, the transport encoding for digests.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContentHash({})", self.to_hex())
    }
}

/// Compute the SHA-512 digest of the full byte content.
///
/// The digest always covers the entire input; the hash state is fed in
/// fixed-size blocks internally but no partial state is exposed.
pub fn hash_bytes(content: &[u8]) -> ContentHash {
    let mut hasher = Sha512::new();
    for block in content.chunks(4096) {
        hasher.update(block);
    }
    ContentHash(hasher.finalize().into())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector_abc() {
        assert_eq!(
            hash_bytes(b"abc").to_hex(),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_known_vector_empty() {
        assert_eq!(
            hash_bytes(b"").to_hex(),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn test_deterministic() {
        let content = vec![0xA5u8; 10_000];
        assert_eq!(hash_bytes(&content), hash_bytes(&content));
    }

    #[test]
    fn test_distinct_inputs_distinct_digests() {
        assert_ne!(hash_bytes(b"file one"), hash_bytes(b"file two"));
    }

    #[test]
    fn test_block_boundary_irrelevant() {
        // Content larger than one internal block hashes the same as the
        // reference one-shot digest.
        let content = vec![7u8; 4096 * 3 + 17];
        let expected = hex::encode(sha2::Sha512::digest(&content));
        assert_eq!(hash_bytes(&content).to_hex(), expected);
    }
}
