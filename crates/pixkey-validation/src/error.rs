//! # Validation Errors
//!
//! A *value* failing a validator's format contract and a key type with
//! *no registered validator* are different failure classes: the first is
//! recoverable user input, the second a deployment defect. Keeping them
//! as separate types lets the registration workflow surface them with
//! different severities.

use thiserror::Error;

use pixkey_core::KeyType;

/// A key value rejected by its key-type validator.
///
/// Carries the key type, the validator's reason, and the offending value
/// so callers can reconstruct a precise user message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {key_type} key {value:?}: {reason}")]
pub struct InvalidKey {
    /// The key type whose contract was violated.
    pub key_type: KeyType,
    /// Human-readable rejection reason.
    pub reason: String,
    /// The rejected value.
    pub value: String,
}

impl InvalidKey {
    /// Build a rejection for the given key type and value.
    pub fn new(key_type: KeyType, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key_type,
            reason: reason.into(),
            value: value.into(),
        }
    }
}

/// A registry lookup failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No validator is registered for a syntactically valid key type.
    /// This indicates a misassembled registry, not bad user input.
    #[error("no validator configured for key type {0}")]
    NotConfigured(KeyType),
}
