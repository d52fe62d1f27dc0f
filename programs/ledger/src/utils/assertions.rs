//! Assertion Helper Functions
//!
//! Common validation checks used across all ledger operations.
//! These functions keep the checks consistent and readable.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn transfer(...) -> LedgerResult<()> {
//!     // Validate everything first
//!     let amount = assert_valid_amount(amount, granularity)?;
//!     assert_allowed_recipient(to, ledger_account)?;
//!
//!     // Then do the actual work
//!     let balance = checked_sub(record.balance_of(), &amount)?;
//!     ...
//! }
//! ```

use crate::error::{LedgerError, LedgerResult};
use num_bigint::{BigInt, BigUint};
use num_traits::{CheckedSub, Zero};
use solana_program::pubkey::Pubkey;

// =============================================================================
// AMOUNT CHECKS
// =============================================================================

/// Assert that an amount is non-negative and a multiple of the granularity.
///
/// Returns the amount as an unsigned number on success.
///
/// # Errors
///
/// Returns `InvalidAmount` for negative amounts and for amounts that are not
/// an exact multiple of `granularity`.
///
/// # Example
///
/// ```ignore
/// // granularity = 10
/// assert_valid_amount(&BigInt::from(30), 10)?;   // Ok(30)
/// assert_valid_amount(&BigInt::from(35), 10)?;   // Err(InvalidAmount)
/// assert_valid_amount(&BigInt::from(-10), 10)?;  // Err(InvalidAmount)
/// ```
pub fn assert_valid_amount(amount: &BigInt, granularity: u32) -> LedgerResult<BigUint> {
    let amount = amount.to_biguint().ok_or(LedgerError::InvalidAmount)?;
    if granularity == 0 || !(&amount % granularity).is_zero() {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(amount)
}

// =============================================================================
// RECIPIENT CHECKS
// =============================================================================

/// Assert that tokens may be sent to `to`.
///
/// The zero address is the burn sentinel, and the ledger's own account
/// would lock the funds.
///
/// # Errors
///
/// Returns `ForbiddenRecipient` for either address.
pub fn assert_allowed_recipient(to: &Pubkey, ledger_account: &Pubkey) -> LedgerResult<()> {
    if *to == Pubkey::default() || to == ledger_account {
        Err(LedgerError::ForbiddenRecipient)
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Addition of two balances.
///
/// Unbounded integers never overflow here; the 32-byte limit is enforced
/// when the result is stored (`AccountRecord::set_balance`).
pub fn add_balance(a: &BigUint, b: &BigUint) -> BigUint {
    a + b
}

/// Checked subtraction that returns a clear error on underflow.
///
/// # Returns
///
/// * `Ok(a - b)` - If `a >= b`
/// * `Err(InsufficientBalance)` - If underflow would occur
///
/// # Example
///
/// ```ignore
/// let remaining = checked_sub(record.balance_of(), &amount)?;
/// ```
pub fn checked_sub(a: &BigUint, b: &BigUint) -> LedgerResult<BigUint> {
    a.checked_sub(b).ok_or(LedgerError::InsufficientBalance)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
