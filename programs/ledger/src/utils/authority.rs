//! Operator Validation
//!
//! Decides whether an address may move a holder's tokens.
//!
//! # Rules
//!
//! 1. A holder is always an operator for itself (never stored).
//! 2. Otherwise the address must be in the holder's stored operator set.
//! 3. A holder that was never written has no operators.
//!
//! # Example Usage
//!
//! ```ignore
//! // operator_send / operator_burn
//! assert_operator_for(&store, caller, from)?;
//! ```

use crate::error::{LedgerError, LedgerResult};
use crate::store::{load_record, AccountStore};
use solana_program::pubkey::Pubkey;

/// Check whether `operator` may act for `holder`.
///
/// # Errors
///
/// Returns `MalformedRecord` if the holder's stored record is corrupted.
pub fn is_operator_for<S: AccountStore + ?Sized>(
    store: &S,
    operator: &Pubkey,
    holder: &Pubkey,
) -> LedgerResult<bool> {
    if operator == holder {
        return Ok(true);
    }
    Ok(load_record(store, holder)?
        .map(|record| record.contains_operator(operator))
        .unwrap_or(false))
}

/// Assert that `operator` may act for `holder`.
///
/// # Errors
///
/// Returns `NotAuthorized` if it may not.
pub fn assert_operator_for<S: AccountStore + ?Sized>(
    store: &S,
    operator: &Pubkey,
    holder: &Pubkey,
) -> LedgerResult<()> {
    if is_operator_for(store, operator, holder)? {
        Ok(())
    } else {
        Err(LedgerError::NotAuthorized)
    }
}
