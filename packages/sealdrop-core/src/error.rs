//! # Error Handling
//!
//! This module provides the error types for Sealdrop Core.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Key Agreement Errors                                              │
//! │  │   ├── InvalidModulus        - Modulus <= 1 in modular exponentiation│
//! │  │   ├── DomainParameter       - Malformed DH parameters / exponents   │
//! │  │   ├── KeyAgreementTimeout   - Server never answered the exchange    │
//! │  │   └── Channel               - Message channel failure               │
//! │  │                                                                      │
//! │  ├── Cipher Errors                                                     │
//! │  │   ├── Padding               - Invalid PKCS#7 padding on decrypt     │
//! │  │   └── MalformedCiphertext   - Blob too short / bad encoding         │
//! │  │                                                                      │
//! │  ├── Framing Errors                                                    │
//! │  │   ├── AmbiguousFraming      - Delimiter collision or missing        │
//! │  │   └── InvalidFilename       - Filename unusable for framing         │
//! │  │                                                                      │
//! │  ├── Upload Errors                                                     │
//! │  │   ├── Io                    - File could not be read                │
//! │  │   ├── Delivery              - Transport failed to deliver payload   │
//! │  │   └── IntegrityMismatch     - Content hash disagrees after decrypt  │
//! │  │                                                                      │
//! │  └── Internal Errors                                                   │
//! │      └── Serialization         - Wire message (de)serialization        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cryptographic and I/O failures propagate to the caller as typed failures;
//! none are retried inside the core. Retry policy, if any, belongs to the
//! transport collaborator.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Sealdrop Core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Sealdrop Core
///
/// All errors are categorized by module/domain to make error handling
/// clearer and to provide meaningful error messages to callers.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Key Agreement Errors (100-199)
    // ========================================================================

    /// Modular exponentiation was asked to operate with modulus <= 1
    #[error("Invalid modulus: modular exponentiation requires modulus > 1")]
    InvalidModulus,

    /// Malformed or out-of-range Diffie-Hellman domain parameters
    #[error("Invalid domain parameters: {0}")]
    DomainParameter(String),

    /// The server never responded to the key agreement request
    #[error("Key agreement timed out after {0:?}")]
    KeyAgreementTimeout(Duration),

    /// The key exchange message channel failed
    #[error("Key exchange channel error: {0}")]
    Channel(String),

    // ========================================================================
    // Cipher Errors (300-399)
    // ========================================================================

    /// Ciphertext could not be validly unpadded — corruption or tampering
    #[error("Invalid PKCS#7 padding: ciphertext corrupted or key mismatch")]
    Padding,

    /// Encrypted blob is structurally invalid (too short, bad encoding)
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    // ========================================================================
    // Framing Errors (400-499)
    // ========================================================================

    /// Filename bytes collide with the framing delimiter, or the delimiter
    /// is missing when unframing
    #[error("Ambiguous payload framing: {0}")]
    AmbiguousFraming(String),

    /// Filename cannot be used for framing (empty or not valid UTF-8)
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // ========================================================================
    // Upload Errors (500-599)
    // ========================================================================

    /// File could not be read; upload aborted, nothing partial is sent
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upload transport failed to deliver the payload
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// Decrypted content does not match the transmitted integrity hash
    #[error("Integrity mismatch: expected {expected}, computed {computed}")]
    IntegrityMismatch {
        /// Hash that travelled with the upload (hex)
        expected: String,
        /// Hash computed over the decrypted content (hex)
        computed: String,
    },

    // ========================================================================
    // Internal Errors (900-999)
    // ========================================================================

    /// Wire message serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Get the numeric error code
    ///
    /// Error codes are organized by category:
    /// - 100-199: Key agreement
    /// - 300-399: Cipher
    /// - 400-499: Framing
    /// - 500-599: Upload
    /// - 900-999: Internal
    pub fn code(&self) -> i32 {
        match self {
            // Key agreement (100-199)
            Error::InvalidModulus => 100,
            Error::DomainParameter(_) => 101,
            Error::KeyAgreementTimeout(_) => 102,
            Error::Channel(_) => 103,

            // Cipher (300-399)
            Error::Padding => 300,
            Error::MalformedCiphertext(_) => 301,

            // Framing (400-499)
            Error::AmbiguousFraming(_) => 400,
            Error::InvalidFilename(_) => 401,

            // Upload (500-599)
            Error::Io(_) => 500,
            Error::Delivery(_) => 501,
            Error::IntegrityMismatch { .. } => 502,

            // Internal (900-999)
            Error::Serialization(_) => 900,
        }
    }

    /// Check if this error is recoverable
    ///
    /// Recoverable errors can potentially be resolved by retrying at the
    /// transport layer or by user action. Cryptographic failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::KeyAgreementTimeout(_)
                | Error::Channel(_)
                | Error::Delivery(_)
                | Error::Io(_)
        )
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::InvalidModulus.code(), 100);
        assert_eq!(Error::DomainParameter("bad".into()).code(), 101);
        assert_eq!(
            Error::KeyAgreementTimeout(Duration::from_secs(10)).code(),
            102
        );
        assert_eq!(Error::Padding.code(), 300);
        assert_eq!(Error::AmbiguousFraming("x".into()).code(), 400);
        assert_eq!(Error::Delivery("x".into()).code(), 501);
        assert_eq!(Error::Serialization("x".into()).code(), 900);
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::KeyAgreementTimeout(Duration::from_secs(1)).is_recoverable());
        assert!(Error::Delivery("offline".into()).is_recoverable());
        assert!(!Error::Padding.is_recoverable());
        assert!(!Error::InvalidModulus.is_recoverable());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert_eq!(err.code(), 500);
        assert!(err.to_string().contains("missing"));
    }
}
