//! # Modular Exponentiation
//!
//! Binary (square-and-multiply) exponentiation over arbitrary-precision
//! integers. This is the arithmetic workhorse behind the Diffie-Hellman
//! key agreement: realistic domain parameters are far larger than any
//! machine word, so everything stays in `BigUint`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Compute `base^exponent mod modulus` by binary exponentiation.
///
/// Iterates over the bits of the exponent from least significant to most:
/// the base is squared mod `modulus` every round, and multiplied into the
/// accumulator whenever the current low bit is set. Runs in
/// O(bits(exponent)) multiplications.
///
/// ## Errors
///
/// Returns [`Error::InvalidModulus`] when `modulus <= 1`; the operation is
/// meaningless in that case (`mod 1` collapses everything to zero and
/// `mod 0` is undefined).
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if *modulus <= BigUint::one() {
        return Err(Error::InvalidModulus);
    }

    let one = BigUint::one();
    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if &exponent & &one == one {
            result = (&result * &base) % modulus;
        }
        exponent >>= 1;
        base = (&base * &base) % modulus;
    }

    Ok(result)
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

    #[test]
    fn test_known_vector() {
        // 4^13 mod 497 = 445
        let result = mod_pow(&big(4), &big(13), &big(497)).unwrap();
        assert_eq!(result, big(445));
    }

    #[test]
    fn test_zero_exponent_is_one() {
        for (b, m) in [(0u64, 2u64), (1, 7), (12345, 23), (7, 1_000_000_007)] {
            assert_eq!(mod_pow(&big(b), &big(0), &big(m)).unwrap(), big(1));
        }
    }

    #[test]
    fn test_more_small_vectors() {
        assert_eq!(
            mod_pow(&big(7), &big(128), &big(1_000_000_007)).unwrap(),
            big(692_745_742)
        );
        assert_eq!(mod_pow(&big(5), &big(117), &big(19)).unwrap(), big(1));
    }

    #[test]
    fn test_base_larger_than_modulus() {
        // Base is reduced mod modulus at entry
        assert_eq!(
            mod_pow(&big(500), &big(13), &big(497)).unwrap(),
            mod_pow(&big(3), &big(13), &big(497)).unwrap()
        );
    }

    #[test]
    fn test_invalid_modulus_rejected() {
        assert!(matches!(
            mod_pow(&big(4), &big(13), &big(1)),
            Err(Error::InvalidModulus)
        ));
        assert!(matches!(
            mod_pow(&big(4), &big(13), &big(0)),
            Err(Error::InvalidModulus)
        ));
    }

    #[test]
    fn test_matches_reference_implementation_on_large_operands() {
        // Cross-check against num-bigint's own modpow with operands well
        // beyond machine-word range.
        let base = BigUint::parse_bytes(b"1234567890123456789012345678901234567890", 10).unwrap();
        let exponent =
            BigUint::parse_bytes(b"98765432109876543210987654321098765432109", 10).unwrap();
        let modulus = BigUint::parse_bytes(
            b"340282366920938463463374607431768211507", // 2^128 + 51
            10,
        )
        .unwrap();

        let ours = mod_pow(&base, &exponent, &modulus).unwrap();
        let reference = base.modpow(&exponent, &modulus);
        assert_eq!(ours, reference);
    }

    #[test]
    fn test_deterministic() {
        let a = mod_pow(&big(4), &big(13), &big(497)).unwrap();
        let b = mod_pow(&big(4), &big(13), &big(497)).unwrap();
        assert_eq!(a, b);
    }
}
