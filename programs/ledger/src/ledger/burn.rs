//! Burn
//!
//! Destroys tokens, decreasing the total supply.

use super::Ledger;
use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventSink, LedgerEvent};
use crate::hooks::{TransferContext, TransferHooks};
use crate::store::{load_record, save_record, AccountStore, Changeset};
use crate::utils::*;
use num_bigint::BigInt;
use solana_program::pubkey::Pubkey;

impl<S: AccountStore, H: TransferHooks, E: EventSink> Ledger<S, H, E> {
    /// Destroy `amount` of the caller's tokens.
    pub fn burn(&mut self, caller: &Pubkey, amount: &BigInt, holder_data: &[u8]) -> LedgerResult<()> {
        self.burn_from(caller, caller, amount, holder_data, &[])
    }

    /// Destroy `amount` of `holder`'s tokens, the caller acting as its
    /// operator.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` unless the caller is an operator for
    /// `holder`, plus every error of `burn`.
    pub fn operator_burn(
        &mut self,
        caller: &Pubkey,
        holder: &Pubkey,
        amount: &BigInt,
        holder_data: &[u8],
        operator_data: &[u8],
    ) -> LedgerResult<()> {
        assert_operator_for(&self.store, caller, holder)?;
        self.burn_from(caller, holder, amount, holder_data, operator_data)
    }

    fn burn_from(
        &mut self,
        operator: &Pubkey,
        holder: &Pubkey,
        amount: &BigInt,
        holder_data: &[u8],
        operator_data: &[u8],
    ) -> LedgerResult<()> {
        let amount = assert_valid_amount(amount, self.config.granularity)?;

        let mut changes = Changeset::new(&self.store);
        let mut record = load_record(&changes, holder)?.ok_or(LedgerError::InsufficientBalance)?;
        let remaining = checked_sub(record.balance_of(), &amount)?;
        record.set_balance(remaining)?;
        save_record(&mut changes, *holder, &record)?;

        let burn_address = Pubkey::default();
        let ctx = TransferContext {
            operator,
            from: holder,
            to: &burn_address,
            amount: &amount,
            user_data: holder_data,
            operator_data,
        };
        self.hooks.notify_sender(&ctx)?;

        // Last fallible step: nothing is committed if the supply would underflow
        self.supply.decrease(&amount)?;

        let writes = changes.into_writes();
        let event = LedgerEvent::Burned {
            operator: *operator,
            holder: *holder,
            amount,
            holder_data: holder_data.to_vec(),
            operator_data: operator_data.to_vec(),
        };
        self.finish(writes, vec![event]);
        Ok(())
    }
}
