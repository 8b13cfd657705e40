//! # Symmetric Cipher
//!
//! AES-256-CBC encryption with PKCS#7 padding for both text fields and
//! framed file payloads.
//!
//! ## Encryption Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ENCRYPTION FLOW                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Step 1: Generate IV (unique per encryption)                           │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  Random 16 bytes from the OS CSPRNG                          │       │
//! │  │  (Never reuse an IV with the same key — CBC reuse leaks     │       │
//! │  │   plaintext-prefix equality!)                                │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  Step 2: Encrypt                                                       │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  AES-256-CBC(key, iv, pad_pkcs7(plaintext))                  │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  Step 3: Assemble the blob                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  IV (16 bytes) ║ ciphertext                                  │       │
//! │  │  Self-contained: the recipient needs only the key.           │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Encodings
//!
//! | Form | Encoding | Used for |
//! |------|----------|----------|
//! | `to_bytes` / `from_bytes` | raw `IV ║ ciphertext` | encrypted file blobs |
//! | `to_base64` / `from_base64` | base64 of the raw form | encrypted text fields |
//!
//! ## Security Properties
//!
//! CBC provides confidentiality only: there is no authentication tag, so
//! a decryption that unpads cleanly may still be forged or bit-flipped.
//! The upload pipeline compensates by transmitting a SHA-512 content hash
//! that the receiver verifies after decryption. Invalid padding is always
//! rejected as [`Error::Padding`], never truncated around.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;

use super::kdf::SymmetricKey;
use crate::error::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Size of the CBC initialization vector in bytes (one AES block)
pub const IV_SIZE: usize = 16;

/// An encrypted payload: IV plus ciphertext.
///
/// Self-contained — together with the session key this is everything the
/// recipient needs to recover the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    /// The initialization vector used for this encryption
    pub iv: [u8; IV_SIZE],
    /// The CBC ciphertext (always a multiple of the block size)
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    /// Serialize as raw bytes: IV immediately followed by the ciphertext.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(IV_SIZE + self.ciphertext.len());
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parse from raw bytes, splitting the first 16 bytes as the IV.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < IV_SIZE {
            return Err(Error::MalformedCiphertext(format!(
                "blob of {} bytes is shorter than one IV",
                bytes.len()
            )));
        }
        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&bytes[..IV_SIZE]);
        Ok(Self {
            iv,
            ciphertext: bytes[IV_SIZE..].to_vec(),
        })
    }

    /// Serialize as base64 of the raw form (for text transport fields).
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.to_bytes())
    }

    /// Parse from the base64 text-transport form.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| Error::MalformedCiphertext(format!("invalid base64: {}", e)))?;
        Self::from_bytes(&bytes)
    }
}

/// Encrypt a byte sequence under the session key.
///
/// Draws a fresh random 16-byte IV per call; encrypting the same
/// plaintext twice yields different blobs that decrypt identically.
pub fn encrypt(plaintext: &[u8], key: &SymmetricKey) -> EncryptedBlob {
    let mut iv = [0u8; IV_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut iv);
    encrypt_with_iv(plaintext, key, iv)
}

/// Encrypt with a caller-supplied IV.
///
/// Deterministic given key and IV; exists for reference vectors and
/// interoperability tests. Production paths must use [`encrypt`], which
/// never reuses an IV.
pub fn encrypt_with_iv(plaintext: &[u8], key: &SymmetricKey, iv: [u8; IV_SIZE]) -> EncryptedBlob {
    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    EncryptedBlob { iv, ciphertext }
}

/// Decrypt a blob under the session key.
///
/// CBC-decrypts the ciphertext with the blob's IV, then strips PKCS#7
/// padding. Invalid padding means corruption, tampering, or a wrong key
/// and is rejected as [`Error::Padding`]. Note that clean unpadding alone
/// does not prove authenticity; the caller verifies the content hash.
pub fn decrypt(blob: &EncryptedBlob, key: &SymmetricKey) -> Result<Vec<u8>> {
    if blob.ciphertext.len() % IV_SIZE != 0 {
        return Err(Error::MalformedCiphertext(format!(
            "ciphertext of {} bytes is not block-aligned",
            blob.ciphertext.len()
        )));
    }
    Aes256CbcDec::new(key.as_bytes().into(), &blob.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&blob.ciphertext)
        .map_err(|_| Error::Padding)
}

// ============================================================================
// TESTS
// ============================================================================
