//! # Registration Policy
//!
//! The configurable business parameters of the registration workflow:
//! the per-person-type active-key ceilings and the phone country code.
//! Defaults match the national payment-system rules; deployments load
//! overrides from a YAML file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pixkey_core::PersonType;
use pixkey_validation::ValidatorRegistry;

/// Failure to load a policy file.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The file could not be read.
    #[error("cannot read policy file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid policy document.
    #[error("cannot parse policy file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Registration policy parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyPolicy {
    /// Maximum concurrently-active keys per account for a natural person.
    pub natural_person_ceiling: u32,
    /// Maximum concurrently-active keys per account for a legal entity.
    pub legal_entity_ceiling: u32,
    /// Country calling code accepted by the phone validator.
    pub phone_country_code: String,
}

impl Default for KeyPolicy {
    /// The national rules: 5 keys for natural persons, 20 for legal
    /// entities, Brazilian country code.
    fn default() -> Self {
        Self {
            natural_person_ceiling: 5,
            legal_entity_ceiling: 20,
            phone_country_code: "55".to_string(),
        }
    }
}

impl KeyPolicy {
    /// The active-key ceiling for the given holder kind.
    pub fn ceiling_for(&self, person: PersonType) -> u32 {
        match person {
            PersonType::NaturalPerson => self.natural_person_ceiling,
            PersonType::LegalEntity => self.legal_entity_ceiling,
        }
    }

    /// Build the validator registry this policy implies.
    pub fn registry(&self) -> ValidatorRegistry {
        ValidatorRegistry::with_phone_country_code(self.phone_country_code.clone())
    }

    /// Parse a policy from a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, PolicyError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a policy from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        Self::from_yaml_str(&std::fs::read_to_string(path)?)
    }
}
