//! # Upload Orchestration
//!
//! Sequences the upload pipeline and owns the boundary to the bulk
//! transport collaborator.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        UPLOAD PIPELINE                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  read file (async, the only suspension point)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SHA-512 content hash ──────────────► hex  ─────────┐                  │
//! │       │                                             │                  │
//! │       ▼                                             │                  │
//! │  encrypt(hash hex)  ────────────────► base64 ───────┤                  │
//! │                                                     ├──► UploadPayload │
//! │  frame(filename ║ "||" ║ bytes)                     │                  │
//! │       │                                             │                  │
//! │       ▼                                             │                  │
//! │  encrypt(framed)  ──────────────────► raw bytes ────┘                  │
//! │                                                     │                  │
//! │                                                     ▼                  │
//! │                                         transport.deliver()            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All cryptographic work is synchronous and CPU-bound. Failures abort
//! the upload before anything reaches the transport — no partial
//! artifacts are ever sent. Retry policy belongs to the transport
//! collaborator, not here.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::crypto::{decrypt, encrypt, hash_bytes, EncryptedBlob, SymmetricKey};
use crate::error::{Error, Result};
use crate::payload::{frame, unframe};

/// The multi-field payload handed to the bulk transport.
///
/// Digests travel hex-encoded, encrypted text fields base64-encoded, and
/// the encrypted file blob as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPayload {
    /// Plaintext filename, for transports that need it as metadata
    pub filename: String,
    /// SHA-512 content hash of the plaintext file, hex-encoded
    pub content_hash: String,
    /// The same hash encrypted under the session key, base64 `IV ║ ct`
    pub encrypted_hash: String,
    /// The framed file payload encrypted under the session key, raw `IV ║ ct`
    pub encrypted_file: Vec<u8>,
}

/// Bulk-transfer seam the collaborator implements.
///
/// The core never retries; a failed delivery surfaces as
/// [`Error::Delivery`] and the caller decides what to do.
#[async_trait]
pub trait UploadTransport: Send {
    /// Deliver one complete upload payload.
    async fn deliver(&mut self, payload: UploadPayload) -> Result<()>;
}

/// Upload orchestrator — hashes, encrypts, and hands off to transport.
pub struct Uploader<T> {
    transport: T,
}

impl<T: UploadTransport> Uploader<T> {
    /// Create an uploader backed by the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Read a file from disk and upload it under the session key.
    ///
    /// The read is the pipeline's only suspension point; a failed read
    /// surfaces as [`Error::Io`] and nothing is transmitted.
    pub async fn upload_file(&mut self, path: &Path, key: &SymmetricKey) -> Result<UploadPayload> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::InvalidFilename(format!("path {:?} has no usable filename", path))
            })?
            .to_string();

        let content = tokio::fs::read(path).await?;
        debug!(filename = %filename, bytes = content.len(), "file read for upload");

        self.upload_bytes(&filename, &content, key).await
    }

    /// Upload already-loaded bytes under the session key.
    pub async fn upload_bytes(
        &mut self,
        filename: &str,
        content: &[u8],
        key: &SymmetricKey,
    ) -> Result<UploadPayload> {
        let payload = prepare_upload(filename, content, key)?;

        self.transport.deliver(payload.clone()).await?;
        info!(filename = %filename, "encrypted upload delivered");
        Ok(payload)
    }

    /// Consume the uploader and return the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

/// Build the complete upload payload for a file's name and content.
///
/// Pure with respect to I/O: hash, encrypt the hash, frame, encrypt the
/// frame. Each encryption draws its own IV, so hash and file never share
/// one.
pub fn prepare_upload(
    filename: &str,
    content: &[u8],
    key: &SymmetricKey,
) -> Result<UploadPayload> {
    let content_hash = hash_bytes(content).to_hex();
    let encrypted_hash = encrypt(content_hash.as_bytes(), key).to_base64();

    let framed = frame(filename, content)?;
    let encrypted_file = encrypt(&framed, key).to_bytes();

    Ok(UploadPayload {
        filename: filename.to_string(),
        content_hash,
        encrypted_hash,
        encrypted_file,
    })
}

// ============================================================================
// RECEIVE SIDE
// ============================================================================

/// Decrypt an encrypted file blob back into filename and content.
///
/// The inverse of the sending pipeline: parse `IV ║ ct`, decrypt, unframe.
pub fn open_encrypted_file(encrypted_file: &[u8], key: &SymmetricKey) -> Result<(String, Vec<u8>)> {
    let blob = EncryptedBlob::from_bytes(encrypted_file)?;
    let framed = decrypt(&blob, key)?;
    unframe(&framed)
}

/// Decrypt a base64 encrypted text field back into a string.
pub fn open_encrypted_text(encrypted: &str, key: &SymmetricKey) -> Result<String> {
    let blob = EncryptedBlob::from_base64(encrypted)?;
    let plaintext = decrypt(&blob, key)?;
    String::from_utf8(plaintext)
        .map_err(|_| Error::MalformedCiphertext("decrypted text is not UTF-8".to_string()))
}

/// Verify decrypted content against the transmitted hex digest.
pub fn verify_content_hash(expected_hex: &str, content: &[u8]) -> Result<()> {
    let computed = hash_bytes(content).to_hex();
    if computed != expected_hex {
        return Err(Error::IntegrityMismatch {
            expected: expected_hex.to_string(),
            computed,
        });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_key() -> SymmetricKey {
        SymmetricKey::from_bytes([7u8; 32])
    }

    /// Transport that records everything it is asked to deliver.
    #[derive(Default)]
    struct RecordingTransport {
        delivered: Vec<UploadPayload>,
    }

    #[async_trait]
    impl UploadTransport for RecordingTransport {
        async fn deliver(&mut self, payload: UploadPayload) -> Result<()> {
            self.delivered.push(payload);
            Ok(())
        }
    }

    /// Transport that always fails.
    struct OfflineTransport;

    #[async_trait]
    impl UploadTransport for OfflineTransport {
        async fn deliver(&mut self, _payload: UploadPayload) -> Result<()> {
            Err(Error::Delivery("server unreachable".to_string()))
        }
    }

    #[test]
    fn test_prepare_upload_fields() {
        let key = test_key();
        let content = b"file content for upload";
        let payload = prepare_upload("data.txt", content, &key).unwrap();

        assert_eq!(payload.filename, "data.txt");
        assert_eq!(payload.content_hash, hash_bytes(content).to_hex());

        // The encrypted hash decrypts back to the hex digest
        let hash_text = open_encrypted_text(&payload.encrypted_hash, &key).unwrap();
        assert_eq!(hash_text, payload.content_hash);

        // The encrypted file decrypts and unframes to the original
        let (filename, restored) = open_encrypted_file(&payload.encrypted_file, &key).unwrap();
        assert_eq!(filename, "data.txt");
        assert_eq!(restored, content);
    }

    #[test]
    fn test_hash_and_file_use_distinct_ivs() {
        let key = test_key();
        let payload = prepare_upload("a.txt", b"content", &key).unwrap();

        let hash_blob = EncryptedBlob::from_base64(&payload.encrypted_hash).unwrap();
        let file_blob = EncryptedBlob::from_bytes(&payload.encrypted_file).unwrap();
        assert_ne!(hash_blob.iv, file_blob.iv);
    }

    #[test]
    fn test_integrity_verification() {
        let content = b"verified content";
        let digest = hash_bytes(content).to_hex();

        assert!(verify_content_hash(&digest, content).is_ok());
        assert!(matches!(
            verify_content_hash(&digest, b"tampered content"),
            Err(Error::IntegrityMismatch { .. })
        ));
    }

    #[test]
    fn test_bad_filename_aborts_before_encryption() {
        let key = test_key();
        assert!(prepare_upload("bad||name", b"content", &key).is_err());
    }

    #[tokio::test]
    async fn test_upload_bytes_delivers_payload() {
        let key = test_key();
        let mut uploader = Uploader::new(RecordingTransport::default());

        let payload = uploader
            .upload_bytes("report.pdf", b"%PDF-1.4 ...", &key)
            .await
            .unwrap();

        assert_eq!(uploader.transport.delivered.len(), 1);
        assert_eq!(uploader.transport.delivered[0], payload);
    }

    #[tokio::test]
    async fn test_upload_file_round_trip() {
        let key = test_key();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"bytes on disk").unwrap();

        let mut uploader = Uploader::new(RecordingTransport::default());
        let payload = uploader.upload_file(file.path(), &key).await.unwrap();

        let (filename, content) = open_encrypted_file(&payload.encrypted_file, &key).unwrap();
        assert_eq!(filename, payload.filename);
        assert_eq!(content, b"bytes on disk");
        verify_content_hash(&payload.content_hash, &content).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_sends_nothing() {
        let key = test_key();
        let mut uploader = Uploader::new(RecordingTransport::default());

        let result = uploader
            .upload_file(Path::new("/definitely/not/here.bin"), &key)
            .await;

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(uploader.transport.delivered.is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_surfaces() {
        let key = test_key();
        let mut uploader = Uploader::new(OfflineTransport);

        let result = uploader.upload_bytes("a.txt", b"content", &key).await;
        assert!(matches!(result, Err(Error::Delivery(_))));
    }

    #[test]
    fn test_wrong_key_cannot_open() {
        let key = test_key();
        let other = SymmetricKey::from_bytes([200u8; 32]);
        let payload = prepare_upload("a.txt", b"secret bytes", &key).unwrap();

        assert!(open_encrypted_file(&payload.encrypted_file, &other).is_err());
    }
}
