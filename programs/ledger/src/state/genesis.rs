//! Genesis Configuration
//!
//! Parameters fixed when the ledger is created. Nothing here changes
//! afterwards; the total supply is handed to the [`SupplyTracker`]
//! which owns it from then on.
//!
//! [`SupplyTracker`]: crate::state::SupplyTracker

use crate::codec::fits_width;
use crate::error::{LedgerError, LedgerResult};
use crate::state::BALANCE_WIDTH;
use num_bigint::BigUint;
use num_traits::Zero;
use solana_program::pubkey::Pubkey;

/// Immutable ledger parameters.
///
/// # Example
///
/// ```ignore
/// let config = GenesisConfig {
///     name: "Aion Token".to_string(),
///     symbol: "ATS".to_string(),
///     granularity: 1,
///     initial_supply: BigUint::from(1_000_000u32),
///     creator,
///     ledger_account,
/// };
/// config.validate()?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisConfig {
    /// Human readable token name. Must not be empty.
    pub name: String,

    /// Ticker symbol. Must not be empty.
    pub symbol: String,

    /// Every transfer and burn amount must be a multiple of this. At least 1.
    pub granularity: u32,

    /// Supply credited to `creator` at genesis. Greater than zero.
    pub initial_supply: BigUint,

    /// Account receiving the whole initial supply. Neither the zero
    /// address nor `ledger_account`.
    pub creator: Pubkey,

    /// The ledger's own account.
    ///
    /// Nobody can send to it, and its balance is excluded from the
    /// liquid supply.
    pub ledger_account: Pubkey,
}

impl GenesisConfig {
    /// Check the parameters before the ledger is built from them.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.name.is_empty() {
            return Err(LedgerError::InvalidGenesis("empty name"));
        }
        if self.symbol.is_empty() {
            return Err(LedgerError::InvalidGenesis("empty symbol"));
        }
        if self.granularity < 1 {
            return Err(LedgerError::InvalidGenesis("granularity must be at least 1"));
        }
        if self.initial_supply.is_zero() {
            return Err(LedgerError::InvalidGenesis("initial supply must be positive"));
        }
        if !fits_width(&self.initial_supply, BALANCE_WIDTH) {
            return Err(LedgerError::InvalidGenesis("initial supply wider than 32 bytes"));
        }
        if self.creator == Pubkey::default() {
            return Err(LedgerError::InvalidGenesis("creator is the zero address"));
        }
        if self.creator == self.ledger_account {
            return Err(LedgerError::InvalidGenesis("creator is the ledger account"));
        }
        Ok(())
    }
}
