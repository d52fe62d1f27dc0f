//! Supply Tracker
//!
//! Owns the total supply. It is set once at genesis and only ever
//! decreases afterwards (burns).

use crate::error::LedgerResult;
use crate::utils::checked_sub;
use num_bigint::BigUint;

/// Total token supply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplyTracker {
    total: BigUint,
}

impl SupplyTracker {
    /// Start tracking from the genesis issuance.
    pub fn new(initial_supply: BigUint) -> Self {
        Self {
            total: initial_supply,
        }
    }

    /// Current total supply.
    pub fn current(&self) -> &BigUint {
        &self.total
    }

    /// Supply after removing `amount`, without applying it.
    ///
    /// Burns compute this before anything is committed so a failure
    /// leaves the tracker untouched.
    pub fn checked_decrease(&self, amount: &BigUint) -> LedgerResult<BigUint> {
        checked_sub(&self.total, amount)
    }

    /// Remove `amount` from the supply.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientBalance` if `amount` exceeds the supply.
    pub fn decrease(&mut self, amount: &BigUint) -> LedgerResult<()> {
        self.total = self.checked_decrease(amount)?;
        Ok(())
    }

    /// Total supply minus the balance parked on the ledger's own account.
    pub fn liquid(&self, locked: &BigUint) -> LedgerResult<BigUint> {
        checked_sub(&self.total, locked)
    }
}
