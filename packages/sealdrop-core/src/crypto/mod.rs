//! # Cryptography Module
//!
//! This module provides all cryptographic primitives used by Sealdrop Core.
//!
//! ## Security Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CRYPTOGRAPHIC ARCHITECTURE                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    KEY AGREEMENT                                │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  Server supplies domain parameters (p, g) and its public value │   │
//! │  │                          │                                      │   │
//! │  │                          ▼                                      │   │
//! │  │  ┌─────────────────────────────────────────────────────────┐   │   │
//! │  │  │  Client: fresh random private exponent x ∈ [1, p-2]     │   │   │
//! │  │  │  Public value  = g^x mod p        (transmitted)         │   │   │
//! │  │  │  Shared secret = server_pub^x mod p   (never sent)      │   │   │
//! │  │  └─────────────────────────────────────────────────────────┘   │   │
//! │  │                          │                                      │   │
//! │  │                          ▼                                      │   │
//! │  │  ┌─────────────────────────────────────────────────────────┐   │   │
//! │  │  │  SymmetricKey = SHA-256(decimal(shared secret))          │   │   │
//! │  │  │  256-bit AES key, session-scoped, zeroized on drop       │   │   │
//! │  │  └─────────────────────────────────────────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 ENCRYPTION SCHEME                               │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  Payload Encryption (AES-256-CBC + PKCS#7)                     │   │
//! │  │  ──────────────────────────────────────────                     │   │
//! │  │                                                                 │   │
//! │  │  • 256-bit key from the key agreement above                    │   │
//! │  │  • 128-bit IV, random per encryption, never reused             │   │
//! │  │  • Output blob: IV || ciphertext                               │   │
//! │  │                                                                 │   │
//! │  │  CBC provides confidentiality only. A SHA-512 content hash     │   │
//! │  │  travels alongside the ciphertext and is verified after        │   │
//! │  │  decryption; see the cipher module notes.                      │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm Choices & Rationale
//!
//! | Algorithm | Purpose | Why Chosen |
//! |-----------|---------|------------|
//! | Classic DH | Key Agreement | Server dictates (p, g); client must follow |
//! | SHA-256 | Key Derivation | Uniform 256-bit key from biased DH output |
//! | AES-256-CBC | Encryption | Wire format the receiving server decrypts |
//! | SHA-512 | Content Integrity | Verified server-side after decryption |
//!
//! ## Security Considerations
//!
//! 1. **Fresh exponents**: the private exponent is drawn from `OsRng` per
//!    session and never reused or persisted
//! 2. **Key zeroization**: the symmetric key is zeroized when dropped
//! 3. **No IV reuse**: every encryption draws a fresh random IV
//! 4. **Arbitrary precision**: all group arithmetic stays in `BigUint`;
//!    values are never narrowed to machine words

mod cipher;
mod dh;
mod hashing;
mod kdf;
mod modpow;

pub use cipher::{encrypt, encrypt_with_iv, decrypt, EncryptedBlob, IV_SIZE};
pub use dh::{
    derive_public_value, derive_shared_secret, DomainParameters, PrivateExponent, SharedSecret,
};
pub use hashing::{hash_bytes, ContentHash, DIGEST_SIZE};
pub use kdf::{derive_key, SymmetricKey, KEY_SIZE};
pub use modpow::mod_pow;
