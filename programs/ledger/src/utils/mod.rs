//! Utility Modules
//!
//! This module provides helper functions used across all ledger operations.
//!
//! # Modules
//!
//! - `assertions`: Amount, recipient and arithmetic checks
//! - `authority`: Operator validation

pub mod assertions;
pub mod authority;

// Re-export all utilities for easy access
pub use assertions::*;
pub use authority::*;
