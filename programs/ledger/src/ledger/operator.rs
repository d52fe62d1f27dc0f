//! Operator Authorization
//!
//! Holders grant and withdraw permission for other addresses to move
//! their tokens.

use super::Ledger;
use crate::error::{LedgerError, LedgerResult};
use crate::events::{EventSink, LedgerEvent};
use crate::hooks::TransferHooks;
use crate::store::{load_record, save_record, AccountStore, Changeset};
use crate::utils;
use solana_program::pubkey::Pubkey;

impl<S: AccountStore, H: TransferHooks, E: EventSink> Ledger<S, H, E> {
    /// Add `operator` to the caller's operator set.
    ///
    /// Authorizing an existing operator is a no-op: nothing is written and
    /// no event is emitted.
    ///
    /// # Errors
    ///
    /// Returns `SelfAuthorization` if `operator == caller`.
    pub fn authorize_operator(&mut self, caller: &Pubkey, operator: &Pubkey) -> LedgerResult<()> {
        if caller == operator {
            return Err(LedgerError::SelfAuthorization);
        }

        let mut changes = Changeset::new(&self.store);
        let mut record = load_record(&changes, caller)?.unwrap_or_default();
        if !record.try_add_operator(*operator) {
            return Ok(());
        }
        save_record(&mut changes, *caller, &record)?;

        let writes = changes.into_writes();
        self.finish(
            writes,
            vec![LedgerEvent::AuthorizedOperator {
                operator: *operator,
                holder: *caller,
            }],
        );
        Ok(())
    }

    /// Remove `operator` from the caller's operator set.
    ///
    /// Revoking the caller itself, an unknown operator, or revoking on a
    /// holder that was never written does nothing.
    pub fn revoke_operator(&mut self, caller: &Pubkey, operator: &Pubkey) -> LedgerResult<()> {
        if caller == operator {
            return Ok(());
        }

        let mut changes = Changeset::new(&self.store);
        let mut record = match load_record(&changes, caller)? {
            Some(record) if record.operator_count() > 0 => record,
            _ => return Ok(()),
        };
        if !record.try_remove_operator(operator) {
            return Ok(());
        }
        save_record(&mut changes, *caller, &record)?;

        let writes = changes.into_writes();
        self.finish(
            writes,
            vec![LedgerEvent::RevokedOperator {
                operator: *operator,
                holder: *caller,
            }],
        );
        Ok(())
    }

    /// Whether `operator` may move tokens of `holder`.
    ///
    /// Every holder is an operator for itself.
    pub fn is_operator_for(&self, operator: &Pubkey, holder: &Pubkey) -> LedgerResult<bool> {
        utils::is_operator_for(&self.store, operator, holder)
    }
}
