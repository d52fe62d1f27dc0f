//! Ledger State Structures
//!
//! This module defines the data the ledger keeps.
//!
//! # State Types
//!
//! | Type | Lives in | Description |
//! |------|----------|-------------|
//! | AccountRecord | store, one value per holder | Balance + operators |
//! | SupplyTracker | ledger | Total supply |
//! | GenesisConfig | ledger | Name, symbol, granularity, accounts |
//!
//! # Serialization
//!
//! Only `AccountRecord` is serialized. It uses a deterministic layout:
//! - Big-endian unsigned balance in a fixed 32-byte slot
//! - Raw 32-byte operator addresses after it
//! - No tags, no padding, no length prefix (the length is the count)

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod genesis;
pub mod record;
pub mod supply;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use crate::codec::ADDRESS_WIDTH;
pub use genesis::GenesisConfig;
pub use record::AccountRecord;
pub use supply::SupplyTracker;

/// Width of the balance slot at the start of every record.
pub const BALANCE_WIDTH: usize = 32;
