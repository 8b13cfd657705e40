//! # Diffie-Hellman Key Agreement
//!
//! Classic finite-field Diffie-Hellman over server-supplied domain
//! parameters. The client never chooses `(p, g)`; it validates what the
//! server sends, draws a fresh private exponent, and derives:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       KEY AGREEMENT FLOW                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   Client                                  Server                       │
//! │     │                                       │                          │
//! │     │◄──────── (p, g, server_pub) ──────────│                          │
//! │     │                                       │                          │
//! │     │  x ← random [1, p-2]                  │  y ← server's exponent   │
//! │     │  client_pub = g^x mod p               │  server_pub = g^y mod p  │
//! │     │                                       │                          │
//! │     │───────── client_pub ─────────────────►│                          │
//! │     │                                       │                          │
//! │     ▼                                       ▼                          │
//! │  secret = server_pub^x mod p          secret = client_pub^y mod p      │
//! │                                                                         │
//! │           Both sides hold the same secret; it is never sent.           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The private exponent is generated from the operating system's CSPRNG
//! for every session. It is never hardcoded, persisted, or transmitted.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::rngs::OsRng;

use crate::crypto::modpow::mod_pow;
use crate::error::{Error, Result};

/// Diffie-Hellman domain parameters, supplied by the server.
///
/// Immutable once received; lifetime is one key-agreement session. The
/// client cannot verify primality cheaply, but structurally impossible
/// parameters are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParameters {
    /// The prime modulus `p`
    pub prime: BigUint,
    /// The generator `g` of the multiplicative group mod `p`
    pub generator: BigUint,
}

impl DomainParameters {
    /// Build validated domain parameters.
    ///
    /// Rejects `prime <= 3` (no room for a nontrivial group) and
    /// generators outside `[2, prime-2]` — `0`, `1`, and `p-1` generate
    /// only trivial or order-2 subgroups.
    pub fn new(prime: BigUint, generator: BigUint) -> Result<Self> {
        if prime <= BigUint::from(3u32) {
            return Err(Error::DomainParameter(format!(
                "prime modulus too small: {}",
                prime
            )));
        }
        let two = BigUint::from(2u32);
        if generator < two || generator > &prime - &two {
            return Err(Error::DomainParameter(format!(
                "generator {} outside [2, p-2]",
                generator
            )));
        }
        Ok(Self { prime, generator })
    }

    /// Upper bound (exclusive) for private exponents: `p - 1`.
    fn exponent_bound(&self) -> BigUint {
        &self.prime - BigUint::one()
    }
}

/// A secret exponent held by one party only.
///
/// Never transmitted. Dropped together with the session once the symmetric
/// key has been derived.
pub struct PrivateExponent {
    value: BigUint,
}

impl PrivateExponent {
    /// Draw a fresh random exponent in `[1, p-2]` from the OS CSPRNG.
    pub fn random(params: &DomainParameters) -> Self {
        // gen_biguint_range samples [low, high), so [1, p-1) = [1, p-2]
        let value = OsRng.gen_biguint_range(&BigUint::one(), &params.exponent_bound());
        Self { value }
    }

    /// Wrap an externally supplied exponent, validating the range.
    ///
    /// Out-of-range exponents are rejected rather than silently reduced
    /// mod `p-1`; a caller handing us `0` or `p-1` almost certainly has a
    /// bug upstream.
    pub fn new(value: BigUint, params: &DomainParameters) -> Result<Self> {
        if value.is_zero() || value >= params.exponent_bound() {
            return Err(Error::DomainParameter(
                "private exponent outside [1, p-2]".to_string(),
            ));
        }
        Ok(Self { value })
    }
}

/// The raw Diffie-Hellman shared secret.
///
/// Both parties compute the same value; it is never transmitted and is
/// immediately reduced to a [`SymmetricKey`](crate::crypto::SymmetricKey)
/// by hashing. The integer form carries number-theoretic structure and is
/// not safe to use as a cipher key directly.
#[derive(PartialEq, Eq)]
pub struct SharedSecret {
    value: BigUint,
}

impl SharedSecret {
    /// Canonical decimal rendering, the input to key derivation.
    pub(crate) fn to_decimal(&self) -> String {
        self.value.to_str_radix(10)
    }
}

/// Derive this party's public value: `g^x mod p`.
pub fn derive_public_value(
    params: &DomainParameters,
    private: &PrivateExponent,
) -> Result<BigUint> {
    mod_pow(&params.generator, &private.value, &params.prime)
}

/// Derive the shared secret from the peer's public value: `peer^x mod p`.
///
/// The peer public value must lie in `[1, p-1]`; anything else cannot be
/// an element of the group and is rejected.
pub fn derive_shared_secret(
    params: &DomainParameters,
    private: &PrivateExponent,
    peer_public: &BigUint,
) -> Result<SharedSecret> {
    if peer_public.is_zero() || *peer_public >= params.prime {
        return Err(Error::DomainParameter(
            "peer public value outside [1, p-1]".to_string(),
        ));
    }
    let value = mod_pow(peer_public, &private.value, &params.prime)?;
    Ok(SharedSecret { value })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn toy_params() -> DomainParameters {
        DomainParameters::new(big(23), big(5)).unwrap()
    }

    #[test]
    fn test_reference_exchange_p23_g5() {
        // p = 23, g = 5, client exponent 6, server exponent 15:
        // client public = 5^6 mod 23 = 8, server public = 5^15 mod 23 = 19,
        // shared secret = 19^6 mod 23 = 8^15 mod 23 = 2.
        let params = toy_params();
        let client = PrivateExponent::new(big(6), &params).unwrap();
        let server = PrivateExponent::new(big(15), &params).unwrap();

        let client_pub = derive_public_value(&params, &client).unwrap();
        let server_pub = derive_public_value(&params, &server).unwrap();
        assert_eq!(client_pub, big(8));
        assert_eq!(server_pub, big(19));

        let client_secret = derive_shared_secret(&params, &client, &server_pub).unwrap();
        let server_secret = derive_shared_secret(&params, &server, &client_pub).unwrap();
        assert!(client_secret == server_secret);
        assert_eq!(client_secret.to_decimal(), "2");
    }

    #[test]
    fn test_random_exponents_agree() {
        // Symmetry must hold for fresh random exponents too
        let params = DomainParameters::new(big(2147483647), big(7)).unwrap();
        let a = PrivateExponent::random(&params);
        let b = PrivateExponent::random(&params);

        let a_pub = derive_public_value(&params, &a).unwrap();
        let b_pub = derive_public_value(&params, &b).unwrap();

        let a_secret = derive_shared_secret(&params, &a, &b_pub).unwrap();
        let b_secret = derive_shared_secret(&params, &b, &a_pub).unwrap();
        assert!(a_secret == b_secret);
    }

    #[test]
    fn test_random_exponent_in_range() {
        let params = toy_params();
        for _ in 0..50 {
            let x = PrivateExponent::random(&params);
            assert!(!x.value.is_zero());
            assert!(x.value <= big(21)); // p - 2
        }
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(DomainParameters::new(big(1), big(5)).is_err());
        assert!(DomainParameters::new(big(3), big(2)).is_err());
        assert!(DomainParameters::new(big(23), big(0)).is_err());
        assert!(DomainParameters::new(big(23), big(1)).is_err());
        assert!(DomainParameters::new(big(23), big(22)).is_err());
        assert!(DomainParameters::new(big(23), big(21)).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_exponent() {
        let params = toy_params();
        assert!(PrivateExponent::new(big(0), &params).is_err());
        assert!(PrivateExponent::new(big(22), &params).is_err()); // p - 1
        assert!(PrivateExponent::new(big(21), &params).is_ok()); // p - 2
        assert!(PrivateExponent::new(big(1), &params).is_ok());
    }

    #[test]
    fn test_rejects_bad_peer_public() {
        let params = toy_params();
        let x = PrivateExponent::new(big(6), &params).unwrap();
        assert!(derive_shared_secret(&params, &x, &big(0)).is_err());
        assert!(derive_shared_secret(&params, &x, &big(23)).is_err());
        assert!(derive_shared_secret(&params, &x, &big(24)).is_err());
        assert!(derive_shared_secret(&params, &x, &big(22)).is_ok());
    }
}
