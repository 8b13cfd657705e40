//! # Sealdrop Core
//!
//! Client-side core for end-to-end encrypted file upload: ephemeral
//! Diffie-Hellman key agreement over a message channel, SHA-512 content
//! integrity, and AES-256-CBC encryption of both the integrity hash and
//! the framed file payload.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SEALDROP CORE MODULES                             │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌──────────────┐   │
//! │  │   Session   │  │   Channel   │  │   Upload    │  │   Payload    │   │
//! │  │             │  │             │  │             │  │              │   │
//! │  │ - Establish │  │ - Key-share │  │ - Prepare   │  │ - Frame      │   │
//! │  │ - Timeout   │  │   messages  │  │ - Deliver   │  │ - Unframe    │   │
//! │  │ - Owns key  │  │ - Transport │  │ - Verify    │  │ - Delimiter  │   │
//! │  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘  └──────┬───────┘   │
//! │         │                │                │                │           │
//! │         └────────────────┴────────────────┴────────────────┘           │
//! │                                   │                                     │
//! │                    ┌──────────────▼──────────────────┐                  │
//! │                    │            Crypto               │                  │
//! │                    │                                 │                  │
//! │                    │ - Modular exponentiation (DH)   │                  │
//! │                    │ - SHA-256 key derivation        │                  │
//! │                    │ - SHA-512 content hashing       │                  │
//! │                    │ - AES-256-CBC / PKCS#7          │                  │
//! │                    └─────────────────────────────────┘                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`crypto`] - Cryptographic primitives (DH, KDF, hashing, cipher)
//! - [`payload`] - Filename/content framing for encrypted file blobs
//! - [`channel`] - Key exchange wire messages and transport seam
//! - [`session`] - Key agreement lifecycle and session key ownership
//! - [`upload`] - Upload pipeline orchestration and receive-side helpers
//!
//! ## Security Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          SECURITY LAYERS                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Layer 1: Key Agreement (ephemeral Diffie-Hellman)                     │
//! │  ─────────────────────────────────────────────────                      │
//! │  Each session draws a fresh private exponent from the OS CSPRNG        │
//! │  and derives the shared secret from the server's public value.         │
//! │  The exponent and raw secret never outlive session establishment.      │
//! │                                                                         │
//! │  Layer 2: Payload Confidentiality (AES-256-CBC + PKCS#7)               │
//! │  ───────────────────────────────────────────────────────                │
//! │  The integrity hash and the framed file are encrypted under the        │
//! │  session key with a fresh random IV per encryption.                    │
//! │                                                                         │
//! │  Layer 3: Content Integrity (SHA-512)                                  │
//! │  ────────────────────────────────────                                   │
//! │  CBC carries no authentication tag, so the pipeline transmits a        │
//! │  SHA-512 digest of the plaintext that the receiver verifies after      │
//! │  decryption.                                                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use sealdrop_core::{SessionConfig, UploadSession, Uploader};
//!
//! let mut session = UploadSession::establish(&mut exchange, SessionConfig::default()).await?;
//! let mut uploader = Uploader::new(bulk_transport);
//! uploader.upload_file(Path::new("report.pdf"), session.key()).await?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod channel;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod session;
pub mod upload;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use channel::{ClientKeyShare, KeyExchangeTransport, ServerKeyShare};
pub use crypto::{ContentHash, DomainParameters, SymmetricKey};
pub use error::{Error, Result};
pub use session::{SessionConfig, UploadSession};
pub use upload::{UploadPayload, UploadTransport, Uploader};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Returns the version of Sealdrop Core
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================================
// TESTS
// ============================================================================
