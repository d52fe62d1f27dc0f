//! Fixed-Width Codec
//!
//! Converts numbers and addresses to and from the byte layouts used by
//! account records and instructions.
//!
//! # Formats
//!
//! | Value | Encoding |
//! |-------|----------|
//! | Balance | unsigned big-endian, exactly `width` bytes |
//! | Address | 32 raw bytes |
//! | Amount (wire) | signed big-endian, minimal length |
//!
//! All functions are pure.

use crate::error::{LedgerError, LedgerResult};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use solana_program::pubkey::Pubkey;

/// Width of an account address in bytes.
pub const ADDRESS_WIDTH: usize = 32;

// =============================================================================
// UNSIGNED INTEGERS
// =============================================================================

/// Encode `value` as exactly `width` unsigned big-endian bytes.
///
/// # Errors
///
/// Returns `EncodingError` if the value needs more than `width` bytes.
///
/// # Example
///
/// ```ignore
/// let bytes = encode_uint(&BigUint::from(1u8), 4)?;
/// assert_eq!(bytes, vec![0, 0, 0, 1]);
/// ```
pub fn encode_uint(value: &BigUint, width: usize) -> LedgerResult<Vec<u8>> {
    let mut out = vec![0u8; width];
    write_uint(value, &mut out)?;
    Ok(out)
}

/// Encode `value` into `dst`, left-padding with zeros.
pub fn write_uint(value: &BigUint, dst: &mut [u8]) -> LedgerResult<()> {
    let width = dst.len();
    if !fits_width(value, width) {
        return Err(LedgerError::EncodingError { width });
    }

    dst.fill(0);
    if !value.is_zero() {
        let bytes = value.to_bytes_be();
        dst[width - bytes.len()..].copy_from_slice(&bytes);
    }
    Ok(())
}

/// Decode unsigned big-endian bytes. The top bit is never a sign bit.
pub fn decode_uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Check whether `value` fits in `width` unsigned bytes.
pub fn fits_width(value: &BigUint, width: usize) -> bool {
    value.bits() <= (width as u64) * 8
}

// =============================================================================
// ADDRESSES
// =============================================================================

/// Encode an address as its raw bytes.
pub fn encode_address(address: &Pubkey) -> [u8; ADDRESS_WIDTH] {
    address.to_bytes()
}

/// Decode an address from its raw bytes.
pub fn decode_address(bytes: &[u8; ADDRESS_WIDTH]) -> Pubkey {
    Pubkey::new_from_array(*bytes)
}

// =============================================================================
// SIGNED WIRE AMOUNTS
// =============================================================================

/// Decode a signed big-endian (two's complement) amount.
///
/// Callers pass at least one byte; instruction parsing rejects a
/// zero-length amount field before it gets here.
pub fn decode_amount(bytes: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_be(bytes)
}

/// Encode an amount as minimal signed big-endian bytes.
pub fn encode_amount(amount: &BigInt) -> Vec<u8> {
    amount.to_signed_bytes_be()
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uint_pads_left() {
        let bytes = encode_uint(&BigUint::from(0x0102u32), 4).unwrap();
        assert_eq!(bytes, vec![0, 0, 1, 2]);
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_uint(&BigUint::zero(), 32).unwrap(), vec![0u8; 32]);
    }

    #[test]
    fn test_encode_uint_too_wide() {
        let value = BigUint::from(0x1_0000u32);
        assert_eq!(
            encode_uint(&value, 2),
            Err(LedgerError::EncodingError { width: 2 })
        );
        // Exactly 256 bits still fits in 32 bytes
        let max = BigUint::from_bytes_be(&[0xff; 32]);
        assert!(encode_uint(&max, 32).is_ok());
        assert!(encode_uint(&(max + 1u8), 32).is_err());
    }

    #[test]
    fn test_decode_uint_has_no_sign() {
        // 0xff would be -1 as a signed integer
        assert_eq!(decode_uint(&[0xff]), BigUint::from(255u32));
        assert_eq!(decode_uint(&[0x80, 0x00]), BigUint::from(0x8000u32));
        assert_eq!(decode_uint(&[]), BigUint::zero());
    }

    #[test]
    fn test_address_roundtrip() {
        let key = Pubkey::new_unique();
        assert_eq!(decode_address(&encode_address(&key)), key);
    }

    #[test]
    fn test_decode_amount_is_signed() {
        assert_eq!(decode_amount(&[0xff]), BigInt::from(-1));
        assert_eq!(decode_amount(&[0x00, 0xff]), BigInt::from(255));
        assert_eq!(decode_amount(&[0x00]), BigInt::from(0));
        assert_eq!(encode_amount(&BigInt::from(-1)), vec![0xff]);
    }
}
