//! Ledger Events
//!
//! Every state change the ledger commits is announced as a [`LedgerEvent`]
//! through an [`EventSink`]. Events of an operation are buffered and only
//! handed to the sink after the operation's writes were committed, so a
//! failed operation never emits anything.

use num_bigint::BigUint;
use solana_program::{msg, pubkey::Pubkey};
use std::fmt;

// =============================================================================
// EVENTS
// =============================================================================

/// A committed state change. Field order is part of the contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    /// Genesis: `total_supply` credited to `creator`.
    AtsTokenCreated {
        /// Initial total supply
        total_supply: BigUint,
        /// Holder of the initial supply
        creator: Pubkey,
    },

    /// `holder` added `operator` to its operator set.
    AuthorizedOperator {
        /// The new operator
        operator: Pubkey,
        /// The holder granting the permission
        holder: Pubkey,
    },

    /// `holder` removed `operator` from its operator set.
    RevokedOperator {
        /// The removed operator
        operator: Pubkey,
        /// The holder revoking the permission
        holder: Pubkey,
    },

    /// Tokens moved from `from` to `to`.
    Sent {
        /// Address that initiated the move (`from` itself for plain sends)
        operator: Pubkey,
        /// Debited holder
        from: Pubkey,
        /// Credited holder
        to: Pubkey,
        /// Amount moved
        amount: BigUint,
        /// Data supplied by the holder
        user_data: Vec<u8>,
        /// Data supplied by the operator (empty for plain sends)
        operator_data: Vec<u8>,
    },

    /// Tokens destroyed from `holder`, reducing the total supply.
    Burned {
        /// Address that initiated the burn
        operator: Pubkey,
        /// Debited holder
        holder: Pubkey,
        /// Amount destroyed
        amount: BigUint,
        /// Data supplied by the holder
        holder_data: Vec<u8>,
        /// Data supplied by the operator (empty for plain burns)
        operator_data: Vec<u8>,
    },
}

impl LedgerEvent {
    /// Event name as seen by hosts.
    pub fn name(&self) -> &'static str {
        match self {
            LedgerEvent::AtsTokenCreated { .. } => "ATSTokenCreated",
            LedgerEvent::AuthorizedOperator { .. } => "AuthorizedOperator",
            LedgerEvent::RevokedOperator { .. } => "RevokedOperator",
            LedgerEvent::Sent { .. } => "Sent",
            LedgerEvent::Burned { .. } => "Burned",
        }
    }
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEvent::AtsTokenCreated {
                total_supply,
                creator,
            } => write!(f, "{}({}, {})", self.name(), total_supply, creator),
            LedgerEvent::AuthorizedOperator { operator, holder }
            | LedgerEvent::RevokedOperator { operator, holder } => {
                write!(f, "{}({}, {})", self.name(), operator, holder)
            }
            LedgerEvent::Sent {
                operator,
                from,
                to,
                amount,
                user_data,
                operator_data,
            } => write!(
                f,
                "{}({}, {}, {}, {}, {} bytes, {} bytes)",
                self.name(),
                operator,
                from,
                to,
                amount,
                user_data.len(),
                operator_data.len()
            ),
            LedgerEvent::Burned {
                operator,
                holder,
                amount,
                holder_data,
                operator_data,
            } => write!(
                f,
                "{}({}, {}, {}, {} bytes, {} bytes)",
                self.name(),
                operator,
                holder,
                amount,
                holder_data.len(),
                operator_data.len()
            ),
        }
    }
}

// =============================================================================
// SINKS
// =============================================================================

/// Receives committed events.
pub trait EventSink {
    /// Handle one event.
    fn emit(&mut self, event: LedgerEvent);
}

/// Writes every event to the program log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: LedgerEvent) {
        msg!("Event: {}", event);
    }
}

/// Collects events in memory.
impl EventSink for Vec<LedgerEvent> {
    fn emit(&mut self, event: LedgerEvent) {
        self.push(event);
    }
}
