//! # Pix Key Record
//!
//! The addressing-key record bound to a bank account, and its lifecycle.
//!
//! ## States
//!
//! ```text
//! create() ──▶ Active ──deactivate()──▶ Inactive (terminal)
//! ```
//!
//! ## Invariants
//!
//! - `id` and `created_at` are assigned once, at construction.
//! - `deactivated_at` is `Some` if and only if `active` is `false`.
//! - Key type, key value, and person type never change after creation.
//! - Deactivating an inactive record is an error, not a silent success.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pixkey_core::{
    AccountNumber, AccountType, BranchNumber, HolderName, KeyId, KeyType, PersonType, Timestamp,
};

/// Errors raised by record construction and lifecycle transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// The record is already inactive; there is no Inactive → Inactive
    /// transition.
    #[error("{0} is already inactive")]
    AlreadyInactive(KeyId),

    /// Construction was attempted with a blank key value.
    #[error("key value must not be blank")]
    MissingKeyValue,
}

/// A fully-populated registration candidate, before identity and
/// creation time are assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewKey {
    /// The key-type variant.
    pub key_type: KeyType,
    /// The key value; format depends on `key_type`.
    pub key_value: String,
    /// Kind of the bound bank account.
    pub account_type: AccountType,
    /// Branch of the bound account.
    pub branch: BranchNumber,
    /// Number of the bound account.
    pub account: AccountNumber,
    /// Account holder name.
    pub holder: HolderName,
    /// Whether the holder is a natural person or a legal entity.
    pub person_type: PersonType,
}

/// The mutable account field group, replaced wholesale by
/// [`PixKey::with_account`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountUpdate {
    /// New account kind.
    pub account_type: AccountType,
    /// New branch number.
    pub branch: BranchNumber,
    /// New account number.
    pub account: AccountNumber,
    /// New holder name.
    pub holder: HolderName,
}

/// A registered Pix key record.
///
/// Fields are private; immutable fields have no setter, and the
/// lifecycle pair (`active`, `deactivated_at`) changes only through
/// [`PixKey::deactivate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixKey {
    id: KeyId,
    key_type: KeyType,
    key_value: String,
    account_type: AccountType,
    branch: BranchNumber,
    account: AccountNumber,
    holder: HolderName,
    person_type: PersonType,
    created_at: Timestamp,
    active: bool,
    deactivated_at: Option<Timestamp>,
}

impl PixKey {
    /// Construct an Active record from a candidate, assigning identity
    /// and creation time.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::MissingKeyValue`] if the key value is blank —
    /// an invariant violation, not a business-rule rejection. (The
    /// remaining required fields are unrepresentable as absent.)
    pub fn create(candidate: NewKey) -> Result<Self, LifecycleError> {
        if candidate.key_value.trim().is_empty() {
            return Err(LifecycleError::MissingKeyValue);
        }
        Ok(Self {
            id: KeyId::new(),
            key_type: candidate.key_type,
            key_value: candidate.key_value,
            account_type: candidate.account_type,
            branch: candidate.branch,
            account: candidate.account,
            holder: candidate.holder,
            person_type: candidate.person_type,
            created_at: Timestamp::now(),
            active: true,
            deactivated_at: None,
        })
    }

    /// Deactivate the record (Active → Inactive), stamping
    /// `deactivated_at` with the current time.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::AlreadyInactive`] if the record is already
    /// inactive.
    pub fn deactivate(self) -> Result<Self, LifecycleError> {
        if !self.active {
            return Err(LifecycleError::AlreadyInactive(self.id));
        }
        Ok(Self {
            active: false,
            deactivated_at: Some(Timestamp::now()),
            ..self
        })
    }

    /// Replace the mutable account field group, leaving identity, key
    /// type, key value, person type, creation time, and lifecycle state
    /// untouched.
    pub fn with_account(self, update: AccountUpdate) -> Self {
        Self {
            account_type: update.account_type,
            branch: update.branch,
            account: update.account,
            holder: update.holder,
            ..self
        }
    }

    /// Record identity.
    pub fn id(&self) -> KeyId {
        self.id
    }

    /// The key-type variant.
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The key value.
    pub fn key_value(&self) -> &str {
        &self.key_value
    }

    /// Kind of the bound bank account.
    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Branch of the bound account.
    pub fn branch(&self) -> BranchNumber {
        self.branch
    }

    /// Number of the bound account.
    pub fn account(&self) -> AccountNumber {
        self.account
    }

    /// Account holder name.
    pub fn holder(&self) -> &HolderName {
        &self.holder
    }

    /// Whether the holder is a natural person or a legal entity.
    pub fn person_type(&self) -> PersonType {
        self.person_type
    }

    /// Creation time.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Whether the record is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivation time; `Some` exactly when the record is inactive.
    pub fn deactivated_at(&self) -> Option<Timestamp> {
        self.deactivated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> NewKey {
        NewKey {
            key_type: KeyType::Email,
            key_value: "ana@example.com".to_string(),
            account_type: AccountType::Checking,
            branch: BranchNumber::new(1234).unwrap(),
            account: AccountNumber::new(12_345_678).unwrap(),
            holder: HolderName::new("Ana", Some("Souza".to_string())).unwrap(),
            person_type: PersonType::NaturalPerson,
        }
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_fresh_record_is_active_without_deactivation_time() {
        let key = PixKey::create(candidate()).unwrap();
        assert!(key.is_active());
        assert_eq!(key.deactivated_at(), None);
    }

    #[test]
    fn test_blank_key_value_rejected() {
        let mut c = candidate();
        c.key_value = "   ".to_string();
        assert_eq!(PixKey::create(c).unwrap_err(), LifecycleError::MissingKeyValue);
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let a = PixKey::create(candidate()).unwrap();
        let b = PixKey::create(candidate()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    #[test]
    fn test_deactivate_sets_timestamp() {
        let key = PixKey::create(candidate()).unwrap();
        let inactive = key.deactivate().unwrap();
        assert!(!inactive.is_active());
        assert!(inactive.deactivated_at().is_some());
    }

    #[test]
    fn test_second_deactivation_rejected() {
        let key = PixKey::create(candidate()).unwrap();
        let id = key.id();
        let inactive = key.deactivate().unwrap();
        let err = inactive.deactivate().unwrap_err();
        assert_eq!(err, LifecycleError::AlreadyInactive(id));
    }

    #[test]
    fn test_deactivate_preserves_identity_and_creation_time() {
        let key = PixKey::create(candidate()).unwrap();
        let (id, created_at) = (key.id(), key.created_at());
        let inactive = key.deactivate().unwrap();
        assert_eq!(inactive.id(), id);
        assert_eq!(inactive.created_at(), created_at);
    }

    // ── Updates ──────────────────────────────────────────────────────

    #[test]
    fn test_with_account_replaces_mutable_group_only() {
        let key = PixKey::create(candidate()).unwrap();
        let (id, created_at) = (key.id(), key.created_at());

        let updated = key.with_account(AccountUpdate {
            account_type: AccountType::Savings,
            branch: BranchNumber::new(4321).unwrap(),
            account: AccountNumber::new(87_654_321).unwrap(),
            holder: HolderName::new("Beatriz", None).unwrap(),
        });

        assert_eq!(updated.account_type(), AccountType::Savings);
        assert_eq!(updated.branch().get(), 4321);
        assert_eq!(updated.account().get(), 87_654_321);
        assert_eq!(updated.holder().first(), "Beatriz");

        assert_eq!(updated.id(), id);
        assert_eq!(updated.created_at(), created_at);
        assert_eq!(updated.key_type(), KeyType::Email);
        assert_eq!(updated.key_value(), "ana@example.com");
        assert_eq!(updated.person_type(), PersonType::NaturalPerson);
        assert!(updated.is_active());
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_serde_roundtrip() {
        let key = PixKey::create(candidate()).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        let parsed: PixKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }
}
