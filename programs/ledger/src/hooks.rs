//! Transfer Hooks
//!
//! Sender and recipient notifications called synchronously while tokens
//! move. A hook returning an error vetoes the movement: the whole operation
//! is aborted and nothing is written.

use crate::error::LedgerResult;
use num_bigint::BigUint;
use solana_program::pubkey::Pubkey;

/// Everything a hook learns about a movement.
///
/// For burns `to` is the zero address and `user_data` is the holder data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferContext<'a> {
    /// Address that initiated the movement
    pub operator: &'a Pubkey,
    /// Debited holder
    pub from: &'a Pubkey,
    /// Credited holder, or the zero address for burns
    pub to: &'a Pubkey,
    /// Amount moved
    pub amount: &'a BigUint,
    /// Holder supplied data
    pub user_data: &'a [u8],
    /// Operator supplied data
    pub operator_data: &'a [u8],
}

/// Notification capability injected into the ledger.
///
/// Both methods default to doing nothing.
pub trait TransferHooks {
    /// Called before the sender is debited (transfers and burns).
    fn notify_sender(&mut self, _ctx: &TransferContext<'_>) -> LedgerResult<()> {
        Ok(())
    }

    /// Called after the recipient is credited (transfers only).
    ///
    /// With `prevent_locking` set, a recipient that cannot handle tokens
    /// should reject them; without it, plain accounts may be skipped.
    fn notify_recipient(
        &mut self,
        _ctx: &TransferContext<'_>,
        _prevent_locking: bool,
    ) -> LedgerResult<()> {
        Ok(())
    }
}

/// Hooks that accept every movement.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHooks;

impl TransferHooks for NoopHooks {}
