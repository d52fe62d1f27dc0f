//! Instruction Types
//!
//! This module defines the mutating calls a host can dispatch to the ledger
//! as raw bytes. Each instruction has:
//! - A discriminant (first byte, identifies the instruction type)
//! - Instruction-specific fields (remaining bytes)
//!
//! The caller is NOT part of the data; the host resolves it and hands it to
//! [`Processor::process`](crate::processor::Processor::process).
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][fields: varies]
//! ```
//!
//! # Field Encodings
//!
//! | Field | Encoding |
//! |-------|----------|
//! | address | 32 raw bytes |
//! | bytes | u32 little-endian length, then the bytes |
//! | amount | `bytes` holding a signed big-endian integer |
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | AuthorizeOperator |
//! | 1 | RevokeOperator |
//! | 2 | Send |
//! | 3 | OperatorSend |
//! | 4 | Burn |
//! | 5 | OperatorBurn |

use crate::codec::{decode_address, decode_amount, encode_amount, ADDRESS_WIDTH};
use crate::error::{LedgerError, LedgerResult};
use arrayref::array_ref;
use num_bigint::BigInt;
use solana_program::pubkey::Pubkey;

// =============================================================================
// LEDGER INSTRUCTION ENUM
// =============================================================================

/// All mutating calls supported by the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerInstruction {
    /// Let `operator` move the caller's tokens.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1..33]: operator
    /// ```
    AuthorizeOperator {
        /// Address to authorize
        operator: Pubkey,
    },

    /// Withdraw a previous authorization.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1..33]: operator
    /// ```
    RevokeOperator {
        /// Address to revoke
        operator: Pubkey,
    },

    /// Move the caller's own tokens.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (2)
    /// [1..33]: to
    /// then: amount (bytes), user_data (bytes)
    /// ```
    Send {
        /// Recipient
        to: Pubkey,
        /// Signed amount; negative values are rejected by the ledger
        amount: BigInt,
        /// Data forwarded to hooks and the Sent event
        user_data: Vec<u8>,
    },

    /// Move tokens of `from`, the caller acting as its operator.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1..33]: from
    /// [33..65]: to
    /// then: amount, user_data, operator_data (all bytes)
    /// ```
    OperatorSend {
        /// Debited holder
        from: Pubkey,
        /// Recipient
        to: Pubkey,
        /// Signed amount
        amount: BigInt,
        /// Holder data
        user_data: Vec<u8>,
        /// Operator data
        operator_data: Vec<u8>,
    },

    /// Destroy the caller's own tokens.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (4)
    /// then: amount, holder_data (bytes)
    /// ```
    Burn {
        /// Signed amount
        amount: BigInt,
        /// Holder data
        holder_data: Vec<u8>,
    },

    /// Destroy tokens of `holder`, the caller acting as its operator.
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (5)
    /// [1..33]: holder
    /// then: amount, holder_data, operator_data (all bytes)
    /// ```
    OperatorBurn {
        /// Debited holder
        holder: Pubkey,
        /// Signed amount
        amount: BigInt,
        /// Holder data
        holder_data: Vec<u8>,
        /// Operator data
        operator_data: Vec<u8>,
    },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl LedgerInstruction {
    /// Parse instruction data.
    ///
    /// # Returns
    /// * `Ok(LedgerInstruction)` - Successfully parsed instruction
    /// * `Err(InvalidInstruction)` - Unknown discriminant, truncated field
    ///   or trailing bytes
    pub fn unpack(input: &[u8]) -> LedgerResult<Self> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(LedgerError::InvalidInstruction)?;

        let (instruction, rest) = match discriminant {
            0 => {
                let (operator, rest) = unpack_pubkey(rest)?;
                (LedgerInstruction::AuthorizeOperator { operator }, rest)
            }

            1 => {
                let (operator, rest) = unpack_pubkey(rest)?;
                (LedgerInstruction::RevokeOperator { operator }, rest)
            }

            2 => {
                let (to, rest) = unpack_pubkey(rest)?;
                let (amount, rest) = unpack_amount(rest)?;
                let (user_data, rest) = unpack_bytes(rest)?;
                (
                    LedgerInstruction::Send {
                        to,
                        amount,
                        user_data,
                    },
                    rest,
                )
            }

            3 => {
                let (from, rest) = unpack_pubkey(rest)?;
                let (to, rest) = unpack_pubkey(rest)?;
                let (amount, rest) = unpack_amount(rest)?;
                let (user_data, rest) = unpack_bytes(rest)?;
                let (operator_data, rest) = unpack_bytes(rest)?;
                (
                    LedgerInstruction::OperatorSend {
                        from,
                        to,
                        amount,
                        user_data,
                        operator_data,
                    },
                    rest,
                )
            }

            4 => {
                let (amount, rest) = unpack_amount(rest)?;
                let (holder_data, rest) = unpack_bytes(rest)?;
                (
                    LedgerInstruction::Burn {
                        amount,
                        holder_data,
                    },
                    rest,
                )
            }

            5 => {
                let (holder, rest) = unpack_pubkey(rest)?;
                let (amount, rest) = unpack_amount(rest)?;
                let (holder_data, rest) = unpack_bytes(rest)?;
                let (operator_data, rest) = unpack_bytes(rest)?;
                (
                    LedgerInstruction::OperatorBurn {
                        holder,
                        amount,
                        holder_data,
                        operator_data,
                    },
                    rest,
                )
            }

            _ => return Err(LedgerError::InvalidInstruction),
        };

        if !rest.is_empty() {
            return Err(LedgerError::InvalidInstruction);
        }
        Ok(instruction)
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes. Inverse of `unpack()`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            LedgerInstruction::AuthorizeOperator { operator } => {
                buf.push(0);
                buf.extend_from_slice(operator.as_ref());
            }

            LedgerInstruction::RevokeOperator { operator } => {
                buf.push(1);
                buf.extend_from_slice(operator.as_ref());
            }

            LedgerInstruction::Send {
                to,
                amount,
                user_data,
            } => {
                buf.push(2);
                buf.extend_from_slice(to.as_ref());
                pack_bytes(&encode_amount(amount), &mut buf);
                pack_bytes(user_data, &mut buf);
            }

            LedgerInstruction::OperatorSend {
                from,
                to,
                amount,
                user_data,
                operator_data,
            } => {
                buf.push(3);
                buf.extend_from_slice(from.as_ref());
                buf.extend_from_slice(to.as_ref());
                pack_bytes(&encode_amount(amount), &mut buf);
                pack_bytes(user_data, &mut buf);
                pack_bytes(operator_data, &mut buf);
            }

            LedgerInstruction::Burn {
                amount,
                holder_data,
            } => {
                buf.push(4);
                pack_bytes(&encode_amount(amount), &mut buf);
                pack_bytes(holder_data, &mut buf);
            }

            LedgerInstruction::OperatorBurn {
                holder,
                amount,
                holder_data,
                operator_data,
            } => {
                buf.push(5);
                buf.extend_from_slice(holder.as_ref());
                pack_bytes(&encode_amount(amount), &mut buf);
                pack_bytes(holder_data, &mut buf);
                pack_bytes(operator_data, &mut buf);
            }
        }

        buf
    }

    /// Instruction name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            LedgerInstruction::AuthorizeOperator { .. } => "AuthorizeOperator",
            LedgerInstruction::RevokeOperator { .. } => "RevokeOperator",
            LedgerInstruction::Send { .. } => "Send",
            LedgerInstruction::OperatorSend { .. } => "OperatorSend",
            LedgerInstruction::Burn { .. } => "Burn",
            LedgerInstruction::OperatorBurn { .. } => "OperatorBurn",
        }
    }
}

// =============================================================================
// FIELD HELPERS
// =============================================================================

fn unpack_pubkey(input: &[u8]) -> LedgerResult<(Pubkey, &[u8])> {
    if input.len() < ADDRESS_WIDTH {
        return Err(LedgerError::InvalidInstruction);
    }
    let (key, rest) = input.split_at(ADDRESS_WIDTH);
    Ok((decode_address(array_ref![key, 0, ADDRESS_WIDTH]), rest))
}

fn unpack_bytes(input: &[u8]) -> LedgerResult<(Vec<u8>, &[u8])> {
    if input.len() < 4 {
        return Err(LedgerError::InvalidInstruction);
    }
    let (len, rest) = input.split_at(4);
    let len = u32::from_le_bytes(*array_ref![len, 0, 4]) as usize;
    if rest.len() < len {
        return Err(LedgerError::InvalidInstruction);
    }
    let (bytes, rest) = rest.split_at(len);
    Ok((bytes.to_vec(), rest))
}

/// Amounts carry at least one byte; zero is encoded as `[0x00]`.
fn unpack_amount(input: &[u8]) -> LedgerResult<(BigInt, &[u8])> {
    let (bytes, rest) = unpack_bytes(input)?;
    if bytes.is_empty() {
        return Err(LedgerError::InvalidInstruction);
    }
    Ok((decode_amount(&bytes), rest))
}

fn pack_bytes(bytes: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf.extend_from_slice(bytes);
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY LENGTH PREFIXES?
====================

Amounts and user data have no fixed size. A u32 little-endian length in
front of each one lets the parser walk the fields in order without any
separators, and makes truncated input detectable.

SIGNED AMOUNTS
==============

Amounts travel as signed big-endian integers, so a client CAN send a
negative amount. Parsing accepts it; the ledger rejects it with
InvalidAmount before touching any state. Keeping the sign on the wire
means that check is the single place where it is enforced.

An amount field must hold at least one byte. Zero travels as [00]; a
zero-length amount is InvalidInstruction.

EXAMPLE
=======

Send 1000 to `to` with user data [7]:

[02][to: 32 bytes][02 00 00 00][03 e8][01 00 00 00][07]
 ^ disc           ^ amount len  ^ 1000 ^ data len   ^ data
*/
