//! # Validator Registry
//!
//! The key-type → validator mapping consulted by the registration
//! workflow. Assembled once by explicit construction (no framework
//! wiring, no process-wide singleton), immutable afterwards, and safe to
//! share across concurrent callers.
//!
//! A lookup miss is a configuration defect, reported as
//! [`RegistryError::NotConfigured`] — deliberately distinct from a value
//! failing its validator's format contract.

use std::collections::HashMap;

use pixkey_core::{KeyType, KEY_TYPE_COUNT};

use crate::error::RegistryError;
use crate::validators::{
    CnpjValidator, CpfValidator, EmailValidator, KeyValidator, PhoneValidator, RandomKeyValidator,
};

/// Immutable mapping from key type to its format validator.
pub struct ValidatorRegistry {
    validators: HashMap<KeyType, Box<dyn KeyValidator>>,
}

impl ValidatorRegistry {
    /// An empty registry. Useful for tests that need a lookup hole;
    /// production code should use [`ValidatorRegistry::default()`].
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Build a registry with all five validators and a non-default
    /// phone country code.
    pub fn with_phone_country_code(country_code: impl Into<String>) -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CpfValidator));
        registry.register(Box::new(CnpjValidator));
        registry.register(Box::new(PhoneValidator::new(country_code)));
        registry.register(Box::new(EmailValidator));
        registry.register(Box::new(RandomKeyValidator));
        registry
    }

    /// Add a validator, keyed by its own `key_type()`. A later
    /// registration for the same key type replaces the earlier one.
    pub fn register(&mut self, validator: Box<dyn KeyValidator>) {
        self.validators.insert(validator.key_type(), validator);
    }

    /// Look up the validator for `key_type`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotConfigured`] when no validator is registered —
    /// a deployment defect, not a value-format failure.
    pub fn validator_for(&self, key_type: KeyType) -> Result<&dyn KeyValidator, RegistryError> {
        self.validators
            .get(&key_type)
            .map(|v| v.as_ref())
            .ok_or(RegistryError::NotConfigured(key_type))
    }

    /// Whether every key type has a registered validator.
    pub fn is_complete(&self) -> bool {
        self.validators.len() == KEY_TYPE_COUNT
            && KeyType::all_types()
                .iter()
                .all(|kt| self.validators.contains_key(kt))
    }
}

impl Default for ValidatorRegistry {
    /// The production registry: all five validators, national defaults.
    fn default() -> Self {
        Self::with_phone_country_code("55")
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<&str> = self.validators.keys().map(|kt| kt.as_str()).collect();
        types.sort_unstable();
        f.debug_struct("ValidatorRegistry")
            .field("registered", &types)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_is_complete() {
        let registry = ValidatorRegistry::default();
        assert!(registry.is_complete());
        for kt in KeyType::all_types() {
            let validator = registry.validator_for(*kt).unwrap();
            assert_eq!(validator.key_type(), *kt);
        }
    }

    #[test]
    fn test_empty_registry_reports_not_configured() {
        let registry = ValidatorRegistry::empty();
        let err = registry.validator_for(KeyType::Cpf).err().unwrap();
        assert_eq!(err, RegistryError::NotConfigured(KeyType::Cpf));
    }

    #[test]
    fn test_partial_registry_is_incomplete() {
        let mut registry = ValidatorRegistry::empty();
        registry.register(Box::new(CpfValidator));
        assert!(!registry.is_complete());
        assert!(registry.validator_for(KeyType::Cpf).is_ok());
        assert!(registry.validator_for(KeyType::Email).is_err());
    }

    #[test]
    fn test_registration_replaces_existing() {
        let mut registry = ValidatorRegistry::default();
        registry.register(Box::new(PhoneValidator::new("44")));
        assert!(registry.is_complete());
        let validator = registry.validator_for(KeyType::Phone).unwrap();
        assert!(validator.validate("+4411987654321").is_ok());
    }

    #[test]
    fn test_registry_dispatches_by_type() {
        let registry = ValidatorRegistry::default();
        assert!(registry
            .validator_for(KeyType::Cpf)
            .unwrap()
            .validate("52998224725")
            .is_ok());
        assert!(registry
            .validator_for(KeyType::Email)
            .unwrap()
            .validate("52998224725")
            .is_err());
    }
}
