//! # Key Derivation
//!
//! Reduces the raw Diffie-Hellman shared secret to a fixed-length
//! symmetric key.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 SHARED SECRET → SYMMETRIC KEY                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Shared secret (big integer, bounded by p, statistically biased)       │
//! │                          │                                              │
//! │                          ▼                                              │
//! │          canonical decimal string rendering                             │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                  SHA-256 digest                                         │
//! │                          │                                              │
//! │                          ▼                                              │
//! │       SymmetricKey (32 bytes, zeroized on drop)                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The raw DH output is bounded by the prime and carries number-theoretic
//! correlations; it is never used as a cipher key directly. Hashing the
//! decimal rendering is the exact reduction the receiving server applies,
//! so both sides arrive at the same 256-bit key. Deterministic, no
//! randomness.

use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

use super::dh::SharedSecret;

/// Size of the symmetric key in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// An AES-256 session key derived from the shared secret.
///
/// Lifetime is one session; regenerated per key agreement, never
/// persisted, zeroized when dropped.
#[derive(ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_SIZE]);

impl SymmetricKey {
    /// Create from raw bytes (for tests and fixed-key vectors).
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw key bytes.
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

/// Derive the session key from a Diffie-Hellman shared secret.
///
/// Hashes the canonical decimal rendering of the secret integer with
/// SHA-256, yielding a uniformly distributed key of the cipher's required
/// length. The raw integer should be dropped immediately afterwards.
pub fn derive_key(secret: &SharedSecret) -> SymmetricKey {
    let digest = Sha256::digest(secret.to_decimal().as_bytes());
    SymmetricKey(digest.into())
}

// ============================================================================
// TESTS
// ============================================================================
