//! # ATS Ledger
//!
//! Accounting core of a multi-operator fungible token.
//!
//! ## Overview
//!
//! This crate allows you to:
//! - Issue a fixed supply to a creator at genesis
//! - Send tokens between holders
//! - Authorize and revoke operators who may move a holder's tokens
//! - Burn tokens (decrease supply)
//! - Query balances, operators, total and liquid supply
//!
//! Every holder's state (balance + operators) is ONE byte value in a
//! key-value store supplied by the host.
//!
//! ## Record Layout
//!
//! | Bytes | Field |
//! |-------|-------|
//! | 0..32 | balance, unsigned big-endian |
//! | 32 + 32*i | operator i |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | AuthorizeOperator | Add an operator |
//! | 1 | RevokeOperator | Remove an operator |
//! | 2 | Send | Move own tokens |
//! | 3 | OperatorSend | Move a holder's tokens as operator |
//! | 4 | Burn | Destroy own tokens |
//! | 5 | OperatorBurn | Destroy a holder's tokens as operator |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Fixed-width integer and address encoding
pub mod codec;

/// Error type with stable codes
pub mod error;

/// Events announced after each committed change
pub mod events;

/// Sender/recipient notification capability
pub mod hooks;

/// Instruction definitions and parsing
pub mod instruction;

/// The ledger state machine
pub mod ledger;

/// Instruction dispatch
pub mod processor;

/// Ledger state structures (AccountRecord, SupplyTracker, GenesisConfig)
pub mod state;

/// Persistence capability and staged writes
pub mod store;

/// Utility functions for validation and math
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::{LedgerError, LedgerResult};
pub use events::{EventSink, LedgerEvent, LogEventSink};
pub use hooks::{NoopHooks, TransferContext, TransferHooks};
pub use instruction::LedgerInstruction;
pub use ledger::Ledger;
pub use processor::Processor;
pub use state::{AccountRecord, GenesisConfig, SupplyTracker};
pub use store::{AccountStore, MemoryStore};
