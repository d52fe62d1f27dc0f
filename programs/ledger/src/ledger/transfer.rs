//! Token Movement
//!
//! Moves tokens between holders, either by the holder itself (`send`) or
//! by one of its operators (`operator_send`).

use super::Ledger;
use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventSink, LedgerEvent};
use crate::hooks::{TransferContext, TransferHooks};
use crate::store::{load_record, save_record, AccountStore, Changeset};
use crate::utils::*;
use num_bigint::BigInt;
use solana_program::pubkey::Pubkey;

impl<S: AccountStore, H: TransferHooks, E: EventSink> Ledger<S, H, E> {
    /// Move `amount` of the caller's tokens to `to`.
    ///
    /// Same as `operator_send` with the caller as both operator and holder
    /// and no operator data.
    pub fn send(
        &mut self,
        caller: &Pubkey,
        to: &Pubkey,
        amount: &BigInt,
        user_data: &[u8],
    ) -> LedgerResult<()> {
        self.transfer(caller, caller, to, amount, user_data, &[], true)
    }

    /// Move `amount` of `from`'s tokens to `to`, the caller acting as
    /// operator for `from`.
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` unless the caller is an operator for `from`,
    /// plus every error of `send`.
    pub fn operator_send(
        &mut self,
        caller: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: &BigInt,
        user_data: &[u8],
        operator_data: &[u8],
    ) -> LedgerResult<()> {
        assert_operator_for(&self.store, caller, from)?;
        self.transfer(caller, from, to, amount, user_data, operator_data, true)
    }

    /// Debit `from`, credit `to`, notify both sides and emit `Sent`.
    ///
    /// Performs no authorization check; `send` and `operator_send` do.
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` - negative or not a multiple of the granularity
    /// * `ForbiddenRecipient` - `to` is the zero address or the ledger account
    /// * `InsufficientBalance` - `from` was never written or holds too little
    /// * `HookRejected` (or any hook error) - a hook vetoed the movement
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn transfer(
        &mut self,
        operator: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: &BigInt,
        user_data: &[u8],
        operator_data: &[u8],
        prevent_locking: bool,
    ) -> LedgerResult<()> {
        let amount = assert_valid_amount(amount, self.config.granularity)?;
        let ctx = TransferContext {
            operator,
            from,
            to,
            amount: &amount,
            user_data,
            operator_data,
        };

        self.hooks.notify_sender(&ctx)?;
        assert_allowed_recipient(to, &self.config.ledger_account)?;

        let mut changes = Changeset::new(&self.store);

        // Debit
        let mut sender = load_record(&changes, from)?.ok_or(LedgerError::InsufficientBalance)?;
        let remaining = checked_sub(sender.balance_of(), &amount)?;
        sender.set_balance(remaining)?;
        save_record(&mut changes, *from, &sender)?;

        // Credit (reads the debited record back when from == to)
        let mut recipient = load_record(&changes, to)?.unwrap_or_default();
        let credited = add_balance(recipient.balance_of(), &amount);
        recipient.set_balance(credited)?;
        save_record(&mut changes, *to, &recipient)?;

        self.hooks.notify_recipient(&ctx, prevent_locking)?;

        let writes = changes.into_writes();
        let event = LedgerEvent::Sent {
            operator: *operator,
            from: *from,
            to: *to,
            amount,
            user_data: user_data.to_vec(),
            operator_data: operator_data.to_vec(),
        };
        self.finish(writes, vec![event]);
        Ok(())
    }
}
