//! Account Record State
//!
//! An account record holds everything the ledger knows about one holder:
//! the token balance and the addresses allowed to move tokens on the
//! holder's behalf (operators).
//!
//! Each record is stored as ONE byte value under the holder's address.
//! All offset arithmetic for that value lives in this file.
//!
//! # Size: 32 + 32 * operator_count bytes

use crate::codec::{decode_address, decode_uint, encode_address, fits_width, write_uint};
use crate::error::{LedgerError, LedgerResult};
use crate::state::{ADDRESS_WIDTH, BALANCE_WIDTH};
use arrayref::array_ref;
use num_bigint::BigUint;
use solana_program::pubkey::Pubkey;

// =============================================================================
// ACCOUNT RECORD STRUCTURE
// =============================================================================

/// Balance and operator set of a single holder.
///
/// # Memory Layout (variable length)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │ Offset      │ Size │ Field         │ Type                   │
/// ├─────────────┼──────┼───────────────┼────────────────────────┤
/// │ 0           │ 32   │ balance       │ u256, big-endian       │
/// │ 32          │ 32   │ operators[0]  │ Pubkey                 │
/// │ 64          │ 32   │ operators[1]  │ Pubkey                 │
/// │ ...         │      │               │                        │
/// │ 32 + 32*i   │ 32   │ operators[i]  │ Pubkey                 │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// A holder with no stored value is equivalent to `AccountRecord::default()`
/// (zero balance, no operators).
///
/// # Example Usage
///
/// ```ignore
/// let mut record = match store.get(&holder) {
///     Some(bytes) => AccountRecord::parse(&bytes)?,
///     None => AccountRecord::default(),
/// };
/// if record.try_add_operator(operator) {
///     store.put(holder, record.serialize()?);
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRecord {
    /// Token balance in base units. Never wider than 256 bits.
    balance: BigUint,

    /// Operators in insertion order, no duplicates.
    ///
    /// The holder itself is never stored here; the authorization entry
    /// point rejects that before the record is touched.
    operators: Vec<Pubkey>,
}

impl AccountRecord {
    /// Create a record with the given balance and no operators.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` if the balance is wider than 32 bytes.
    pub fn with_balance(balance: BigUint) -> LedgerResult<Self> {
        let mut record = Self::default();
        record.set_balance(balance)?;
        Ok(record)
    }

    /// Deserialize a record from its stored bytes.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` unless the length is `32 + 32 * k`.
    pub fn parse(input: &[u8]) -> LedgerResult<Self> {
        if !is_valid_len(input.len()) {
            return Err(LedgerError::MalformedRecord { len: input.len() });
        }

        let (balance, operators) = input.split_at(BALANCE_WIDTH);
        let operators = operators
            .chunks_exact(ADDRESS_WIDTH)
            .map(|chunk| decode_address(array_ref![chunk, 0, ADDRESS_WIDTH]))
            .collect();

        Ok(AccountRecord {
            balance: decode_uint(balance),
            operators,
        })
    }

    /// Serialize the record into its stored bytes.
    ///
    /// Deterministic: equal records always produce equal bytes.
    pub fn serialize(&self) -> LedgerResult<Vec<u8>> {
        let mut output = vec![0u8; self.serialized_len()];
        let (balance_dst, operators_dst) = output.split_at_mut(BALANCE_WIDTH);

        write_uint(&self.balance, balance_dst)?;
        for (dst, operator) in operators_dst
            .chunks_exact_mut(ADDRESS_WIDTH)
            .zip(&self.operators)
        {
            dst.copy_from_slice(&encode_address(operator));
        }

        Ok(output)
    }

    /// Number of bytes `serialize` produces.
    pub fn serialized_len(&self) -> usize {
        BALANCE_WIDTH + self.operators.len() * ADDRESS_WIDTH
    }

    /// Current balance.
    pub fn balance_of(&self) -> &BigUint {
        &self.balance
    }

    /// Replace the balance. Operators are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` if the balance is wider than 32 bytes.
    /// The record is unchanged in that case.
    pub fn set_balance(&mut self, balance: BigUint) -> LedgerResult<()> {
        if !fits_width(&balance, BALANCE_WIDTH) {
            return Err(LedgerError::EncodingError {
                width: BALANCE_WIDTH,
            });
        }
        self.balance = balance;
        Ok(())
    }

    /// Operators in insertion order.
    pub fn operators(&self) -> &[Pubkey] {
        &self.operators
    }

    /// Number of stored operators.
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    /// Check if `operator` is in the operator set.
    pub fn contains_operator(&self, operator: &Pubkey) -> bool {
        self.operators.iter().any(|entry| entry == operator)
    }

    /// Append `operator` unless it is already present.
    ///
    /// Returns `true` if the record changed.
    pub fn try_add_operator(&mut self, operator: Pubkey) -> bool {
        if self.contains_operator(&operator) {
            return false;
        }
        self.operators.push(operator);
        true
    }

    /// Remove `operator`, keeping the order of the remaining entries.
    ///
    /// Returns `true` if the record changed.
    pub fn try_remove_operator(&mut self, operator: &Pubkey) -> bool {
        match self.operators.iter().position(|entry| entry == operator) {
            Some(index) => {
                self.operators.remove(index);
                true
            }
            None => false,
        }
    }
}

/// A stored value is a balance followed by whole addresses.
fn is_valid_len(len: usize) -> bool {
    len >= BALANCE_WIDTH && (len - BALANCE_WIDTH) % ADDRESS_WIDTH == 0
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn record_with(balance: u64, operators: &[Pubkey]) -> AccountRecord {
        let mut record = AccountRecord::with_balance(BigUint::from(balance)).unwrap();
        for operator in operators {
            assert!(record.try_add_operator(*operator));
        }
        record
    }

    #[test]
    fn test_default_record_is_empty() {
        let record = AccountRecord::default();
        assert!(record.balance_of().is_zero());
        assert_eq!(record.operator_count(), 0);
        assert_eq!(record.serialize().unwrap(), vec![0u8; 32]);
    }

    #[test]
    fn test_layout_is_balance_then_operators() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let record = record_with(0x0102, &[a, b]);

        let bytes = record.serialize().unwrap();
        assert_eq!(bytes.len(), 96);
        assert_eq!(&bytes[..30], &[0u8; 30]);
        assert_eq!(&bytes[30..32], &[0x01, 0x02]);
        assert_eq!(&bytes[32..64], a.as_ref());
        assert_eq!(&bytes[64..96], b.as_ref());
    }

    #[test]
    fn test_parse_serialize_roundtrip() {
        let original = record_with(1_000_000, &[Pubkey::new_unique(), Pubkey::new_unique()]);
        let bytes = original.serialize().unwrap();
        let parsed = AccountRecord::parse(&bytes).unwrap();

        assert_eq!(parsed, original);
        assert_eq!(parsed.serialize().unwrap(), bytes);
    }

    #[test]
    fn test_parse_rejects_bad_lengths() {
        for len in [0usize, 1, 31, 33, 63, 65, 100] {
            assert_eq!(
                AccountRecord::parse(&vec![0u8; len]),
                Err(LedgerError::MalformedRecord { len })
            );
        }
        for len in [32usize, 64, 96, 320] {
            assert!(AccountRecord::parse(&vec![0u8; len]).is_ok());
        }
    }

    #[test]
    fn test_balance_top_bit_is_not_a_sign() {
        let mut bytes = vec![0u8; 32];
        bytes[0] = 0x80;
        let record = AccountRecord::parse(&bytes).unwrap();
        assert_eq!(*record.balance_of(), BigUint::from(1u8) << 255usize);
    }

    #[test]
    fn test_set_balance_keeps_operators() {
        let operator = Pubkey::new_unique();
        let mut record = record_with(500, &[operator]);

        record.set_balance(BigUint::from(42u32)).unwrap();

        assert_eq!(*record.balance_of(), BigUint::from(42u32));
        assert_eq!(record.operators(), &[operator]);
    }

    #[test]
    fn test_set_balance_rejects_wide_values() {
        let mut record = record_with(7, &[]);
        let too_wide = BigUint::from(1u8) << 256usize;

        assert_eq!(
            record.set_balance(too_wide),
            Err(LedgerError::EncodingError { width: 32 })
        );
        assert_eq!(*record.balance_of(), BigUint::from(7u32));
    }

    #[test]
    fn test_add_operator_is_idempotent() {
        let operator = Pubkey::new_unique();
        let mut record = AccountRecord::default();

        assert!(record.try_add_operator(operator));
        assert_eq!(record.serialized_len(), 64);
        assert!(!record.try_add_operator(operator));
        assert_eq!(record.operator_count(), 1);
    }

    #[test]
    fn test_remove_operator_preserves_order() {
        let keys: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let mut record = record_with(1, &keys);

        assert!(record.try_remove_operator(&keys[1]));
        assert_eq!(record.operators(), &[keys[0], keys[2], keys[3]]);

        assert!(!record.try_remove_operator(&keys[1]));
        assert!(!record.contains_operator(&keys[1]));
        assert!(record.contains_operator(&keys[3]));
    }

    #[test]
    fn test_remove_last_operator_shrinks_to_balance_only() {
        let operator = Pubkey::new_unique();
        let mut record = record_with(9, &[operator]);

        assert!(record.try_remove_operator(&operator));
        assert_eq!(record.serialize().unwrap().len(), BALANCE_WIDTH);
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY ONE VALUE PER HOLDER?
=========================

The store only knows `get(key)` and `put(key, bytes)`. Keeping the balance
and the operators in one value means every operation touches at most one
key per holder, and a holder's state can never be half-updated.

GROWTH AND SHRINKING
====================

    balance only           32 bytes
    + first operator       64 bytes
    + second operator      96 bytes
    - revoke first         64 bytes (second moves up one slot)

Removal compacts the list so the layout stays dense. Lookups are a linear
scan: operator sets are small, and no index would survive serialization
anyway.

BIG-ENDIAN, UNSIGNED
====================

The balance slot is read as an unsigned number. A leading 0x80 byte means
2^255, not a negative value.
*/
