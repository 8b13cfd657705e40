//! # Upload Session
//!
//! An explicit session object owning the ephemeral key material for one
//! key agreement. Nothing lives in ambient scope: the orchestrator
//! creates a session, the session owns the symmetric key, and everything
//! is dropped (and the key zeroized) when the session ends.
//!
//! ## Session Lifecycle
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       SESSION LIFECYCLE                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  1. Request parameters (bounded wait)                                  │
//! │     ┌─────────────┐                                                    │
//! │     │ establish() │──► transport.request_parameters()                  │
//! │     └─────────────┘──► elapse → KeyAgreementTimeout                    │
//! │            │                                                           │
//! │            ▼                                                           │
//! │  2. Validate and derive                                                │
//! │     ┌─────────────┐                                                    │
//! │     │  validate   │──► fresh private exponent from OsRng               │
//! │     │  (p, g)     │──► client public = g^x mod p                       │
//! │     └─────────────┘──► secret = server_pub^x mod p → SHA-256 → key     │
//! │            │                                                           │
//! │            ▼                                                           │
//! │  3. Publish                                                            │
//! │     ┌─────────────┐                                                    │
//! │     │ send client │──► exponent and raw secret dropped here            │
//! │     │ public value│                                                    │
//! │     └─────────────┘                                                    │
//! │            │                                                           │
//! │            ▼                                                           │
//! │  4. Ready — session owns the SymmetricKey until dropped                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::{debug, info};

use crate::channel::{ClientKeyShare, KeyExchangeTransport};
use crate::crypto::{
    derive_key, derive_public_value, derive_shared_secret, PrivateExponent, SymmetricKey,
};
use crate::error::{Error, Result};

/// Configuration for establishing an upload session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Bounded wait for the server's key-share answer. An unresponsive
    /// server fails the session with `KeyAgreementTimeout` instead of
    /// hanging the client indefinitely.
    pub exchange_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exchange_timeout: Duration::from_secs(10),
        }
    }
}

/// An established session holding the derived symmetric key.
///
/// The private exponent and raw shared secret never leave
/// [`UploadSession::establish`]; only the hashed key survives. One
/// session serves one sequential upload pipeline — the key is never
/// shared across concurrent encryptions.
pub struct UploadSession {
    key: SymmetricKey,
}

impl UploadSession {
    /// Run the key agreement round trip and derive the session key.
    ///
    /// ## Errors
    ///
    /// - [`Error::KeyAgreementTimeout`] when the server does not answer
    ///   within `config.exchange_timeout`
    /// - [`Error::DomainParameter`] for malformed parameters or an
    ///   out-of-group server public value
    /// - [`Error::Channel`] when the transport fails outright
    pub async fn establish<T: KeyExchangeTransport>(
        transport: &mut T,
        config: SessionConfig,
    ) -> Result<UploadSession> {
        debug!("requesting key agreement parameters");
        let share = tokio::time::timeout(config.exchange_timeout, transport.request_parameters())
            .await
            .map_err(|_| Error::KeyAgreementTimeout(config.exchange_timeout))??;

        let params = share.domain_parameters()?;
        info!(prime_bits = params.prime.bits(), "domain parameters accepted");

        let private = PrivateExponent::random(&params);
        let client_public = derive_public_value(&params, &private)?;
        let secret = derive_shared_secret(&params, &private, &share.server_public)?;
        let key = derive_key(&secret);

        transport
            .send_client_share(ClientKeyShare { client_public })
            .await?;
        debug!("client public value published, session key derived");

        Ok(UploadSession { key })
    }

    /// The session's symmetric key.
    pub fn key(&self) -> &SymmetricKey {
        &self.key
    }

    /// Consume the session, handing the key to a longer-lived owner.
    pub fn into_key(self) -> SymmetricKey {
        self.key
    }
}

// ============================================================================
// TESTS
// ============================================================================
