//! # Workflow Errors
//!
//! Error taxonomies for the registration workflow and the
//! lookup/lifecycle workflows. Every variant carries the context a
//! caller needs to build a precise user message.
//!
//! `ValidatorNotConfigured` is the one server-fault-class error here —
//! it signals a misassembled registry, not bad input — and is kept as
//! its own variant so callers can surface it with a different severity.

use thiserror::Error;

use pixkey_core::{KeyId, KeyType, PersonType};
use pixkey_state::LifecycleError;
use pixkey_validation::{InvalidKey, RegistryError};

use crate::filter::FilterError;
use crate::ports::StoreError;

/// Rejection of a registration attempt.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The key type is not available to this holder kind.
    #[error("a {person_type} holder cannot register a {key_type} key")]
    TypePersonMismatch {
        /// The holder's person type.
        person_type: PersonType,
        /// The requested key type.
        key_type: KeyType,
    },

    /// No validator registered for the key type (deployment defect).
    #[error(transparent)]
    ValidatorNotConfigured(#[from] RegistryError),

    /// The key value failed its format contract.
    #[error(transparent)]
    InvalidKey(#[from] InvalidKey),

    /// Another active key already holds this value.
    #[error("key already exists: {value}")]
    DuplicateKey {
        /// The colliding key value.
        value: String,
    },

    /// The account already holds the maximum number of active keys.
    #[error("maximum number of keys reached for this account: {ceiling}")]
    LimitExceeded {
        /// The person-type-dependent ceiling that was hit.
        ceiling: u32,
    },

    /// Record construction invariant violated (blank key value).
    #[error(transparent)]
    Invariant(#[from] LifecycleError),

    /// The storage collaborator failed.
    #[error("storage error: {0}")]
    Store(StoreError),
}

/// Rejection of a lookup, update, deactivation, or search.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No record with the given identity.
    #[error("key not found: {0}")]
    NotFound(KeyId),

    /// Lifecycle transition rejected (already inactive).
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// The search filter was incoherent.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// The storage collaborator failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
