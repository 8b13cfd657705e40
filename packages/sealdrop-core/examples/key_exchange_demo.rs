//! # Key Exchange Demo
//!
//! Demonstrates the Diffie-Hellman key agreement round trip against an
//! in-process server, and shows that both ends derive the same session key.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example key_exchange_demo
//! ```

use async_trait::async_trait;
use num_bigint::BigUint;
use sealdrop_core::channel::{ClientKeyShare, KeyExchangeTransport, ServerKeyShare};
use sealdrop_core::crypto::{
    decrypt, derive_key, derive_public_value, derive_shared_secret, encrypt, DomainParameters,
    PrivateExponent, SymmetricKey,
};
use sealdrop_core::{Result, SessionConfig, UploadSession};

/// In-process server running its own side of the exchange.
struct LoopbackServer {
    params: DomainParameters,
    private: PrivateExponent,
    client_public: Option<BigUint>,
}

impl LoopbackServer {
    fn new() -> Result<Self> {
        let params = DomainParameters::new(BigUint::from(23u32), BigUint::from(5u32))?;
        let private = PrivateExponent::random(&params);
        Ok(Self {
            params,
            private,
            client_public: None,
        })
    }

    fn session_key(&self) -> Result<SymmetricKey> {
        let client_public = self.client_public.as_ref().expect("no client share yet");
        let secret = derive_shared_secret(&self.params, &self.private, client_public)?;
        Ok(derive_key(&secret))
    }
}

#[async_trait]
impl KeyExchangeTransport for LoopbackServer {
    async fn request_parameters(&mut self) -> Result<ServerKeyShare> {
        Ok(ServerKeyShare {
            prime: self.params.prime.clone(),
            generator: self.params.generator.clone(),
            server_public: derive_public_value(&self.params, &self.private)?,
        })
    }

    async fn send_client_share(&mut self, share: ClientKeyShare) -> Result<()> {
        self.client_public = Some(share.client_public);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Sealdrop Core: Key Exchange Demo ===\n");

    // Step 1: Stand up an in-process server
    println!("Step 1: Starting in-process server (p=23, g=5)...");
    let mut server = LoopbackServer::new()?;
    println!();
    println!("  ┌─────────────────────────────────────────────────────────────┐");
    println!("  │                    KEY EXCHANGE FLOW                        │");
    println!("  ├─────────────────────────────────────────────────────────────┤");
    println!("  │                                                             │");
    println!("  │   Client                             Server                 │");
    println!("  │     │                                  │                    │");
    println!("  │     │──── request parameters ─────────►│                    │");
    println!("  │     │                                  │                    │");
    println!("  │     │◄─── {{ p, g, kpu_serv }} ──────────│                    │");
    println!("  │     │                                  │                    │");
    println!("  │     │──── {{ client_kpu }} ─────────────►│                    │");
    println!("  │     │                                  │                    │");
    println!("  │     ▼                                  ▼                    │");
    println!("  │  ┌──────────┐                    ┌──────────┐              │");
    println!("  │  │  g^y^x   │        ==          │  g^x^y   │              │");
    println!("  │  │  mod p   │                    │  mod p   │              │");
    println!("  │  └──────────┘                    └──────────┘              │");
    println!("  │                                                             │");
    println!("  └─────────────────────────────────────────────────────────────┘");
    println!();

    // Step 2: Run the client side of the handshake
    println!("Step 2: Establishing the session...");
    let session = UploadSession::establish(&mut server, SessionConfig::default()).await?;
    println!("  [OK] Session established, key derived");
    println!();

    // Step 3: Prove both ends hold the same key
    println!("Step 3: Verifying both ends derived the same key...");
    let message = b"round trip through both keys";
    let blob = encrypt(message, session.key());
    let server_key = server.session_key()?;
    let recovered = decrypt(&blob, &server_key)?;

    if recovered == message {
        println!("  [OK] Client-encrypted message decrypts under the server's key");
    } else {
        println!("  [FAILED] Keys do not match!");
    }
    println!();

    println!("=== Demo complete ===");
    Ok(())
}
