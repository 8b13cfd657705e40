//! # Upload Demo
//!
//! Demonstrates the full upload pipeline: hash, encrypt, frame, deliver,
//! and the receive side opening and verifying the payload.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example upload_demo
//! ```

use async_trait::async_trait;
use sealdrop_core::crypto::SymmetricKey;
use sealdrop_core::upload::{open_encrypted_file, open_encrypted_text, verify_content_hash};
use sealdrop_core::{Result, UploadPayload, UploadTransport, Uploader};

/// Transport that hands the payload straight back to the demo.
#[derive(Default)]
struct CapturingTransport {
    received: Option<UploadPayload>,
}

#[async_trait]
impl UploadTransport for CapturingTransport {
    async fn deliver(&mut self, payload: UploadPayload) -> Result<()> {
        println!("  [transport] delivering {} ...", payload.filename);
        self.received = Some(payload);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Sealdrop Core: Encrypted Upload Demo ===\n");

    // A real client derives this key via the key exchange; the demo uses
    // a fixed key so the output is reproducible.
    let key = SymmetricKey::from_bytes([7u8; 32]);

    // Step 1: Upload a file's bytes
    println!("Step 1: Uploading...");
    let content = b"Quarterly figures, eyes only.";
    let mut uploader = Uploader::new(CapturingTransport::default());
    let payload = uploader.upload_bytes("figures.txt", content, &key).await?;
    println!();

    println!("  Content hash (SHA-512 hex): {}...", &payload.content_hash[..32]);
    println!("  Encrypted hash (base64):    {}...", &payload.encrypted_hash[..32]);
    println!("  Encrypted file blob:        {} bytes (IV + ciphertext)", payload.encrypted_file.len());
    println!();

    // Step 2: Receive side opens the blob
    println!("Step 2: Opening on the receive side...");
    let received = uploader
        .into_transport()
        .received
        .expect("transport captured nothing");

    let (filename, restored) = open_encrypted_file(&received.encrypted_file, &key)?;
    println!("  Recovered filename: {}", filename);
    println!("  Recovered content:  \"{}\"", String::from_utf8_lossy(&restored));
    println!();

    // Step 3: Verify integrity against the transmitted hash
    println!("Step 3: Verifying integrity...");
    let transmitted_hash = open_encrypted_text(&received.encrypted_hash, &key)?;
    verify_content_hash(&transmitted_hash, &restored)?;
    println!("  [OK] SHA-512 digest matches the decrypted content");
    println!();

    println!("=== Demo complete ===");
    Ok(())
}
