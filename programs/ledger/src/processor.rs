//! Instruction Processor
//!
//! Routes a packed [`LedgerInstruction`] to the matching ledger operation
//! on behalf of an already resolved caller.

use crate::error::LedgerResult;
use crate::events::EventSink;
use crate::hooks::TransferHooks;
use crate::instruction::LedgerInstruction;
use crate::ledger::Ledger;
use crate::store::AccountStore;
use solana_program::{msg, pubkey::Pubkey};

/// Main processor that routes instructions to ledger operations
pub struct Processor;

impl Processor {
    /// Process one ledger instruction for `caller`.
    pub fn process<S, H, E>(
        ledger: &mut Ledger<S, H, E>,
        caller: &Pubkey,
        instruction_data: &[u8],
    ) -> LedgerResult<()>
    where
        S: AccountStore,
        H: TransferHooks,
        E: EventSink,
    {
        // Parse the instruction
        let instruction = LedgerInstruction::unpack(instruction_data)?;
        msg!("Instruction: {}", instruction.name());

        // Route to appropriate operation
        match instruction {
            LedgerInstruction::AuthorizeOperator { operator } => {
                ledger.authorize_operator(caller, &operator)
            }

            LedgerInstruction::RevokeOperator { operator } => {
                ledger.revoke_operator(caller, &operator)
            }

            LedgerInstruction::Send {
                to,
                amount,
                user_data,
            } => ledger.send(caller, &to, &amount, &user_data),

            LedgerInstruction::OperatorSend {
                from,
                to,
                amount,
                user_data,
                operator_data,
            } => ledger.operator_send(caller, &from, &to, &amount, &user_data, &operator_data),

            LedgerInstruction::Burn {
                amount,
                holder_data,
            } => ledger.burn(caller, &amount, &holder_data),

            LedgerInstruction::OperatorBurn {
                holder,
                amount,
                holder_data,
                operator_data,
            } => ledger.operator_burn(caller, &holder, &amount, &holder_data, &operator_data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::ledger::tests::test_ledger;
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn test_process_send() {
        let mut ledger = test_ledger(1000, 1);
        let creator = ledger.config().creator;
        let to = Pubkey::new_unique();

        let data = LedgerInstruction::Send {
            to,
            amount: BigInt::from(250),
            user_data: vec![],
        }
        .pack();
        Processor::process(&mut ledger, &creator, &data).unwrap();

        assert_eq!(ledger.balance_of(&to).unwrap(), BigUint::from(250u32));
    }

    #[test]
    fn test_process_rejects_garbage() {
        let mut ledger = test_ledger(1000, 1);
        let creator = ledger.config().creator;

        assert_eq!(
            Processor::process(&mut ledger, &creator, &[42]),
            Err(LedgerError::InvalidInstruction)
        );
    }
}
