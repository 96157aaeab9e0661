//! # In-Memory Store
//!
//! A reference implementation of the storage ports backed by a
//! `HashMap`, used by the workflow tests and the CLI demo. It enforces
//! the active-value uniqueness constraint at save time, so the
//! persist-time duplicate path of the registration workflow is
//! exercisable without a database.
//!
//! Single-node only; the `Mutex` exists to satisfy the `Send + Sync`
//! port bounds, not to answer distributed concurrency.

use std::collections::HashMap;
use std::sync::Mutex;

use pixkey_core::{AccountNumber, BranchNumber, KeyId};
use pixkey_state::PixKey;

use crate::filter::SearchFilter;
use crate::ports::{KeyDirectory, KeyStore, StoreError};

/// In-memory record store keyed by record identity.
#[derive(Default)]
pub struct MemoryKeyStore {
    records: Mutex<HashMap<KeyId, PixKey>>,
}

impl MemoryKeyStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, active and inactive.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<KeyId, PixKey>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }
}

impl KeyDirectory for MemoryKeyStore {
    fn exists_active_key_value(&self, value: &str) -> Result<bool, StoreError> {
        let records = self.lock()?;
        Ok(records
            .values()
            .any(|k| k.is_active() && k.key_value() == value))
    }

    fn count_active_keys_for_account(
        &self,
        branch: BranchNumber,
        account: AccountNumber,
    ) -> Result<u32, StoreError> {
        let records = self.lock()?;
        Ok(records
            .values()
            .filter(|k| k.is_active() && k.branch() == branch && k.account() == account)
            .count() as u32)
    }
}

impl KeyStore for MemoryKeyStore {
    fn save(&self, record: PixKey) -> Result<PixKey, StoreError> {
        let mut records = self.lock()?;
        if record.is_active() {
            let collision = records.values().any(|existing| {
                existing.id() != record.id()
                    && existing.is_active()
                    && existing.key_value() == record.key_value()
            });
            if collision {
                return Err(StoreError::DuplicateActiveValue {
                    value: record.key_value().to_string(),
                });
            }
        }
        records.insert(record.id(), record.clone());
        Ok(record)
    }

    fn find_by_id(&self, id: KeyId) -> Result<Option<PixKey>, StoreError> {
        let records = self.lock()?;
        Ok(records.get(&id).cloned())
    }

    fn search(&self, filter: &SearchFilter) -> Result<Vec<PixKey>, StoreError> {
        let records = self.lock()?;
        let mut hits: Vec<PixKey> = records
            .values()
            .filter(|k| matches_filter(k, filter))
            .cloned()
            .collect();
        hits.sort_by_key(|k| (k.created_at(), *k.id().as_uuid()));
        Ok(hits)
    }
}

fn matches_filter(record: &PixKey, filter: &SearchFilter) -> bool {
    if let Some(kt) = filter.key_type {
        if record.key_type() != kt {
            return false;
        }
    }
    if let Some(branch) = filter.branch {
        if record.branch() != branch {
            return false;
        }
    }
    if let Some(account) = filter.account {
        if record.account() != account {
            return false;
        }
    }
    if let Some(ref name) = filter.holder_name {
        if record.holder().first() != name {
            return false;
        }
    }
    if let Some(created_after) = filter.created_after {
        if record.created_at() < created_after {
            return false;
        }
    }
    if let Some(deactivated_after) = filter.deactivated_after {
        match record.deactivated_at() {
            Some(at) if at >= deactivated_after => {}
            _ => return false,
        }
    }
    true
}
