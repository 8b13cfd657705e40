//! # Key Exchange Channel
//!
//! Wire messages for the two-message key agreement round trip, and the
//! transport seam the collaborator implements.
//!
//! ## Message Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KEY EXCHANGE MESSAGES                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   Client                                  Server                       │
//! │     │                                       │                          │
//! │     │───── request parameters ─────────────►│                          │
//! │     │                                       │                          │
//! │     │◄──── ServerKeyShare ──────────────────│                          │
//! │     │      { p, g, kpu_serv }               │                          │
//! │     │                                       │                          │
//! │     │───── ClientKeyShare ─────────────────►│                          │
//! │     │      { client_kpu }                   │                          │
//! │     │                                       │                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Big integers are serialized as decimal strings so that DH-sized values
//! survive JSON transport without precision loss; the deserializer also
//! accepts plain JSON numbers for small toy parameters.

use async_trait::async_trait;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::crypto::DomainParameters;
use crate::error::Result;

/// Domain parameters and server public value, delivered as a single
/// structured message in response to the client's parameter request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerKeyShare {
    /// The prime modulus `p`
    #[serde(rename = "p", with = "decimal_biguint")]
    pub prime: BigUint,

    /// The generator `g`
    #[serde(rename = "g", with = "decimal_biguint")]
    pub generator: BigUint,

    /// The server's public value `g^y mod p`
    #[serde(rename = "kpu_serv", with = "decimal_biguint")]
    pub server_public: BigUint,
}

impl ServerKeyShare {
    /// Validate and extract the domain parameters from this share.
    pub fn domain_parameters(&self) -> Result<DomainParameters> {
        DomainParameters::new(self.prime.clone(), self.generator.clone())
    }
}

/// The client's public value, sent once after deriving it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientKeyShare {
    /// The client's public value `g^x mod p`
    #[serde(rename = "client_kpu", with = "decimal_biguint")]
    pub client_public: BigUint,
}

/// Transport seam for the key exchange round trip.
///
/// The collaborator owns the actual message channel (socket, websocket,
/// in-process pair — the core does not care). The session layer wraps
/// `request_parameters` in a bounded wait; implementations do not need
/// their own timeout.
#[async_trait]
pub trait KeyExchangeTransport: Send {
    /// Request domain parameters and the server public value.
    ///
    /// One round trip: emit the parameter request, resolve with the
    /// server's answer.
    async fn request_parameters(&mut self) -> Result<ServerKeyShare>;

    /// Send the client's public value to the server.
    async fn send_client_share(&mut self, share: ClientKeyShare) -> Result<()>;
}

// ============================================================================
// SERDE HELPERS
// ============================================================================

/// Serde helper serializing big integers as decimal strings.
mod decimal_biguint {
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Decimal(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(BigUint::from(n)),
            Raw::Decimal(s) => BigUint::parse_bytes(s.as_bytes(), 10)
                .ok_or_else(|| serde::de::Error::custom("invalid decimal integer")),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
