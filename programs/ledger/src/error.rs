//! Custom Error Types
//!
//! This module defines all errors that the ledger can return.
//! Each error has a unique numeric code that hosts can match against.
//!
//! # Error Codes
//!
//! | Code | Error | Category |
//! |------|-------|----------|
//! | 0 | MalformedRecord | Storage |
//! | 1 | EncodingError | Storage |
//! | 2 | InvalidAmount | Movement |
//! | 3 | InsufficientBalance | Movement |
//! | 4 | ForbiddenRecipient | Movement |
//! | 5 | SelfAuthorization | Operators |
//! | 6 | NotAuthorized | Operators |
//! | 7 | HookRejected | Hooks |
//! | 8 | InvalidInstruction | Dispatch |
//! | 9 | InvalidGenesis | Genesis |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::{LedgerError, LedgerResult};
//!
//! fn some_check(valid: bool) -> LedgerResult<()> {
//!     if !valid {
//!         return Err(LedgerError::NotAuthorized);
//!     }
//!     Ok(())
//! }
//! ```

use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Result type returned by every fallible ledger operation.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the ledger.
///
/// Every error aborts the whole operation: nothing is written to the
/// store and no event is emitted.
///
/// # Important
///
/// NEVER reorder these variants! Hosts depend on stable error codes.
/// Always add new errors at the end and extend [`LedgerError::code`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LedgerError {
    // =========================================================================
    // STORAGE ERRORS (0-1)
    // =========================================================================

    /// Error 0: Stored bytes do not match the account record layout.
    ///
    /// A record is always `32 + 32 * k` bytes. Any other length means the
    /// store is corrupted.
    #[error("Malformed account record ({len} bytes)")]
    MalformedRecord {
        /// Length of the offending byte value
        len: usize,
    },

    /// Error 1: A number does not fit its fixed-width slot.
    #[error("Value does not fit in {width} bytes")]
    EncodingError {
        /// Width of the slot in bytes
        width: usize,
    },

    // =========================================================================
    // MOVEMENT ERRORS (2-4)
    // =========================================================================

    /// Error 2: Amount is negative or not a multiple of the granularity.
    #[error("Invalid amount")]
    InvalidAmount,

    /// Error 3: The debit would make a balance negative.
    ///
    /// Also returned when the debited account has never been written.
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// Error 4: Destination is the zero address or the ledger's own account.
    ///
    /// Sending to the zero address would be an untracked burn, and funds
    /// sent to the ledger account would be locked.
    #[error("Forbidden recipient")]
    ForbiddenRecipient,

    // =========================================================================
    // OPERATOR ERRORS (5-6)
    // =========================================================================

    /// Error 5: Caller tried to authorize itself as its own operator.
    ///
    /// A holder is always implicitly its own operator.
    #[error("Cannot authorize self as operator")]
    SelfAuthorization,

    /// Error 6: Caller is not an operator for the holder.
    #[error("Caller is not an operator for the holder")]
    NotAuthorized,

    // =========================================================================
    // EXTENSION ERRORS (7-9)
    // =========================================================================

    /// Error 7: A sender or recipient hook vetoed the movement.
    #[error("Rejected by transfer hook")]
    HookRejected,

    /// Error 8: Instruction data could not be decoded.
    ///
    /// Unknown discriminant, truncated field or trailing bytes.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 9: Genesis configuration failed validation.
    #[error("Invalid genesis configuration: {0}")]
    InvalidGenesis(&'static str),
}

impl LedgerError {
    /// Stable numeric code for this error.
    ///
    /// Variants carry data, so the discriminant cast the token program
    /// uses (`e as u32`) is not available here.
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::MalformedRecord { .. } => 0,
            LedgerError::EncodingError { .. } => 1,
            LedgerError::InvalidAmount => 2,
            LedgerError::InsufficientBalance => 3,
            LedgerError::ForbiddenRecipient => 4,
            LedgerError::SelfAuthorization => 5,
            LedgerError::NotAuthorized => 6,
            LedgerError::HookRejected => 7,
            LedgerError::InvalidInstruction => 8,
            LedgerError::InvalidGenesis(_) => 9,
        }
    }
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert LedgerError to ProgramError.
///
/// Lets a host running the ledger inside a program surface our errors as
/// `ProgramError::Custom(code)`.
impl From<LedgerError> for ProgramError {
    fn from(e: LedgerError) -> Self {
        ProgramError::Custom(e.code())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

ALL-OR-NOTHING
==============

No error is recoverable inside the ledger. An operation either:
- succeeds: every staged write is committed, then events are emitted
- fails: the staged writes are dropped, no event is emitted

So the caller never has to reason about partial state. The error value
only tells it WHY the operation had no effect.

WHY CODES INSTEAD OF `as u32`?
==============================

MalformedRecord and EncodingError carry the offending length/width,
and InvalidGenesis carries a reason. Enums with fields cannot be cast
to integers, so `code()` spells the mapping out. Keep it in sync with
the table at the top of this file.
*/
