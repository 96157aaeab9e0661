//! # Storage Collaborator Ports
//!
//! The contracts this core consumes from its storage collaborator: the
//! active-key uniqueness oracle, the per-account count oracle, and the
//! record store itself. Implementations live outside this core (the
//! in-memory reference adapter in [`crate::memory`] exists for tests and
//! demos).
//!
//! ## Contract
//!
//! Both oracles answer against storage state *as of the call*; the
//! workflow does not serialize check-then-persist across concurrent
//! registrations. A store that enforces active-value uniqueness at save
//! time reports the collision as [`StoreError::DuplicateActiveValue`],
//! which the workflow maps to the same duplicate-key rejection as an
//! oracle hit. Retry policy for transient backend faults belongs to the
//! implementation, never to the workflow.

use thiserror::Error;

use pixkey_core::{AccountNumber, BranchNumber, KeyId};
use pixkey_state::PixKey;

use crate::filter::SearchFilter;

/// A storage-layer failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Save-time violation of the active-value uniqueness constraint.
    #[error("active key value already present: {value}")]
    DuplicateActiveValue {
        /// The colliding key value.
        value: String,
    },

    /// Any other backend fault.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// The two read oracles consulted before a registration is persisted.
pub trait KeyDirectory: Send + Sync {
    /// Whether any currently-active key holds `value`.
    fn exists_active_key_value(&self, value: &str) -> Result<bool, StoreError>;

    /// Number of currently-active keys bound to the given account.
    fn count_active_keys_for_account(
        &self,
        branch: BranchNumber,
        account: AccountNumber,
    ) -> Result<u32, StoreError>;
}

/// The record store consumed by the workflows.
pub trait KeyStore: KeyDirectory {
    /// Persist a record (insert or replace by identity), returning the
    /// stored record.
    fn save(&self, record: PixKey) -> Result<PixKey, StoreError>;

    /// Fetch a record by identity.
    fn find_by_id(&self, id: KeyId) -> Result<Option<PixKey>, StoreError>;

    /// Return all records matching a validated filter.
    fn search(&self, filter: &SearchFilter) -> Result<Vec<PixKey>, StoreError>;
}
