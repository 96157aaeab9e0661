//! # Key Workflows
//!
//! The registration workflow and its siblings (deactivate, get, update,
//! search), orchestrated over the validator registry and a storage
//! collaborator.
//!
//! ## Registration steps
//!
//! Each step short-circuits on first failure; steps 1–5 perform no
//! writes, step 6 is the sole write:
//!
//! 1. person/key-type compatibility → `TypePersonMismatch`
//! 2. registry lookup → `ValidatorNotConfigured`
//! 3. format validation → `InvalidKey`
//! 4. uniqueness oracle → `DuplicateKey`
//! 5. per-account count vs. person-type ceiling → `LimitExceeded`
//! 6. persist; a save-time active-value collision also maps to
//!    `DuplicateKey`

use tracing::{debug, info, warn};

use pixkey_core::KeyId;
use pixkey_state::{AccountUpdate, NewKey, PixKey};
use pixkey_validation::ValidatorRegistry;

use crate::error::{RegistrationError, ServiceError};
use crate::filter::QueryFilter;
use crate::policy::KeyPolicy;
use crate::ports::{KeyStore, StoreError};

/// The workflow front door: owns the store handle, the validator
/// registry, and the registration policy.
pub struct KeyService<S> {
    store: S,
    registry: ValidatorRegistry,
    policy: KeyPolicy,
}

impl<S: KeyStore> KeyService<S> {
    /// Build a service with the national default policy and the full
    /// validator registry.
    pub fn new(store: S) -> Self {
        Self::with_policy(store, KeyPolicy::default())
    }

    /// Build a service with a custom policy; the registry is derived
    /// from it.
    pub fn with_policy(store: S, policy: KeyPolicy) -> Self {
        let registry = policy.registry();
        Self {
            store,
            registry,
            policy,
        }
    }

    /// Build a service with an explicit registry. Intended for tests
    /// that need a registry with a deliberate hole.
    pub fn with_registry(store: S, policy: KeyPolicy, registry: ValidatorRegistry) -> Self {
        Self {
            store,
            registry,
            policy,
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new key, enforcing the full rule chain.
    pub fn register(&self, candidate: NewKey) -> Result<PixKey, RegistrationError> {
        debug!(
            key_type = %candidate.key_type,
            person_type = %candidate.person_type,
            "registration attempt"
        );

        if !candidate.key_type.allowed_for(candidate.person_type) {
            warn!(
                key_type = %candidate.key_type,
                person_type = %candidate.person_type,
                "rejected: key type not available to holder kind"
            );
            return Err(RegistrationError::TypePersonMismatch {
                person_type: candidate.person_type,
                key_type: candidate.key_type,
            });
        }

        let validator = self.registry.validator_for(candidate.key_type)?;
        validator.validate(&candidate.key_value)?;

        if self
            .store
            .exists_active_key_value(&candidate.key_value)
            .map_err(RegistrationError::Store)?
        {
            return Err(RegistrationError::DuplicateKey {
                value: candidate.key_value,
            });
        }

        let count = self
            .store
            .count_active_keys_for_account(candidate.branch, candidate.account)
            .map_err(RegistrationError::Store)?;
        let ceiling = self.policy.ceiling_for(candidate.person_type);
        if count >= ceiling {
            warn!(count, ceiling, "rejected: account at key ceiling");
            return Err(RegistrationError::LimitExceeded { ceiling });
        }

        let record = PixKey::create(candidate)?;
        match self.store.save(record) {
            Ok(saved) => {
                info!(id = %saved.id(), key_type = %saved.key_type(), "key registered");
                Ok(saved)
            }
            // A concurrent registration won the race between the oracle
            // check and the insert; same rejection as an oracle hit.
            Err(StoreError::DuplicateActiveValue { value }) => {
                Err(RegistrationError::DuplicateKey { value })
            }
            Err(other) => Err(RegistrationError::Store(other)),
        }
    }

    /// Deactivate a key by identity.
    pub fn deactivate(&self, id: KeyId) -> Result<PixKey, ServiceError> {
        let record = self
            .store
            .find_by_id(id)?
            .ok_or(ServiceError::NotFound(id))?;
        let inactive = record.deactivate()?;
        let saved = self.store.save(inactive)?;
        info!(id = %saved.id(), "key deactivated");
        Ok(saved)
    }

    /// Fetch a key by identity.
    pub fn get(&self, id: KeyId) -> Result<Option<PixKey>, ServiceError> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Replace the mutable account field group of an existing key.
    /// Key type, key value, identity, creation time, and person type
    /// are untouchable by construction.
    pub fn update(&self, id: KeyId, update: AccountUpdate) -> Result<PixKey, ServiceError> {
        let record = self
            .store
            .find_by_id(id)?
            .ok_or(ServiceError::NotFound(id))?;
        let saved = self.store.save(record.with_account(update))?;
        info!(id = %saved.id(), "key account fields updated");
        Ok(saved)
    }

    /// Search keys with a validated filter.
    pub fn search(&self, filter: QueryFilter) -> Result<Vec<PixKey>, ServiceError> {
        let filter = filter.validate()?;
        Ok(self.store.search(&filter)?)
    }
}
