//! Account Store
//!
//! The ledger persists nothing itself. It reads and writes account records
//! through the [`AccountStore`] capability, one byte value per holder.
//!
//! # Transactions
//!
//! Operations never write to the store directly. They stage writes in a
//! [`Changeset`], which reads through to the store, and the ledger commits
//! the changeset only after every check, hook and mutation has succeeded.
//!
//! ```ignore
//! let mut changes = Changeset::new(&store);
//! let mut record = load_record(&changes, &holder)?.unwrap_or_default();
//! record.set_balance(new_balance)?;
//! save_record(&mut changes, holder, &record)?;
//! let writes = changes.into_writes();   // releases the borrow
//! commit(&mut store, writes);
//! ```

use crate::error::LedgerResult;
use crate::state::AccountRecord;
use solana_program::pubkey::Pubkey;
use std::collections::BTreeMap;

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Key-value persistence keyed by holder address.
pub trait AccountStore {
    /// Stored value for `key`, or `None` if it was never written.
    fn get(&self, key: &Pubkey) -> Option<Vec<u8>>;

    /// Replace the value for `key`.
    fn put(&mut self, key: Pubkey, value: Vec<u8>);
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Ordered in-memory store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<Pubkey, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys ever written.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was written yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pubkey, &Vec<u8>)> {
        self.entries.iter()
    }
}

impl AccountStore for MemoryStore {
    fn get(&self, key: &Pubkey) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: Pubkey, value: Vec<u8>) {
        self.entries.insert(key, value);
    }
}

// =============================================================================
// CHANGESET
// =============================================================================

/// Staged writes on top of a read-only store.
///
/// Reads see staged values first, so a holder debited earlier in the same
/// operation is read back debited (this matters when `from == to`).
#[derive(Debug)]
pub struct Changeset<'a, S: AccountStore + ?Sized> {
    base: &'a S,
    writes: BTreeMap<Pubkey, Vec<u8>>,
}

impl<'a, S: AccountStore + ?Sized> Changeset<'a, S> {
    /// Start a changeset over `base`.
    pub fn new(base: &'a S) -> Self {
        Self {
            base,
            writes: BTreeMap::new(),
        }
    }

    /// Staged writes, ready for [`commit`].
    pub fn into_writes(self) -> BTreeMap<Pubkey, Vec<u8>> {
        self.writes
    }
}

impl<S: AccountStore + ?Sized> AccountStore for Changeset<'_, S> {
    fn get(&self, key: &Pubkey) -> Option<Vec<u8>> {
        match self.writes.get(key) {
            Some(value) => Some(value.clone()),
            None => self.base.get(key),
        }
    }

    fn put(&mut self, key: Pubkey, value: Vec<u8>) {
        self.writes.insert(key, value);
    }
}

/// Apply staged writes to the store.
pub fn commit<S: AccountStore + ?Sized>(store: &mut S, writes: BTreeMap<Pubkey, Vec<u8>>) {
    for (key, value) in writes {
        store.put(key, value);
    }
}

// =============================================================================
// RECORD HELPERS
// =============================================================================

/// Load and parse the record of `holder`.
///
/// `None` means the holder was never written; callers that need a record
/// use `unwrap_or_default()` so first-time holders always start from the
/// same empty record.
pub fn load_record<S: AccountStore + ?Sized>(
    store: &S,
    holder: &Pubkey,
) -> LedgerResult<Option<AccountRecord>> {
    store
        .get(holder)
        .map(|bytes| AccountRecord::parse(&bytes))
        .transpose()
}

/// Serialize and store the record of `holder`.
pub fn save_record<S: AccountStore + ?Sized>(
    store: &mut S,
    holder: Pubkey,
    record: &AccountRecord,
) -> LedgerResult<()> {
    store.put(holder, record.serialize()?);
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
