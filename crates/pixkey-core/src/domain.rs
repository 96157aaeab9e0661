//! # Key, Account, and Person Taxonomies — Single Source of Truth
//!
//! Defines the `KeyType` enum with the five addressing-key categories the
//! national payment system supports, plus the `AccountType` and
//! `PersonType` enums that constrain them. These are the ONE definition
//! used across the entire stack. Every `match` on `KeyType` must be
//! exhaustive — adding a key type forces every consumer to handle it at
//! compile time.
//!
//! ## Invariant
//!
//! The string identifiers produced by `as_str()` are the exact tokens the
//! search-filter validator matches against, case-sensitively. `FromStr`
//! accepts those identifiers and nothing else.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FieldError;

/// The five supported addressing-key categories.
///
/// | # | Key type | Value shape |
/// |---|----------|-------------|
/// | 1 | Cpf | 11-digit natural-person tax identifier, two check digits |
/// | 2 | Cnpj | 14-digit legal-entity tax identifier, two check digits |
/// | 3 | Phone | `+55` followed by area code and 9-digit subscriber number |
/// | 4 | Email | conservative email shape, at most 77 characters |
/// | 5 | Random | canonical hyphenated UUID, bank-generated |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// Natural-person national tax identifier (11 digits).
    Cpf,
    /// Legal-entity national tax identifier (14 digits).
    Cnpj,
    /// Mobile phone number in international form.
    Phone,
    /// Email address.
    Email,
    /// Opaque random token in canonical UUID form.
    Random,
}

/// Total number of key types. Used for registry completeness assertions.
pub const KEY_TYPE_COUNT: usize = 5;

impl KeyType {
    /// Returns all five key types in canonical order.
    pub fn all_types() -> &'static [KeyType] {
        &[
            Self::Cpf,
            Self::Cnpj,
            Self::Phone,
            Self::Email,
            Self::Random,
        ]
    }

    /// Returns the snake_case string identifier for this key type.
    ///
    /// This must match the serde serialization format and the tokens
    /// accepted by the search-filter validator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Random => "random",
        }
    }

    /// Whether this key type may be held by the given person type.
    ///
    /// A CPF key identifies a natural person and a CNPJ key identifies a
    /// legal entity; each is forbidden for the other holder kind. The
    /// remaining key types are unrestricted.
    pub fn allowed_for(&self, person: PersonType) -> bool {
        match self {
            Self::Cpf => person == PersonType::NaturalPerson,
            Self::Cnpj => person == PersonType::LegalEntity,
            Self::Phone | Self::Email | Self::Random => true,
        }
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = FieldError;

    /// Parse a key type from its snake_case string identifier.
    ///
    /// Matching is exact and case-sensitive; `"CPF"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            "random" => Ok(Self::Random),
            other => Err(FieldError::UnknownKeyType(other.to_string())),
        }
    }
}

/// The two supported bank account kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Checking account.
    Checking,
    /// Savings account.
    Savings,
}

impl AccountType {
    /// Returns the snake_case string identifier for this account type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            other => Err(FieldError::UnknownAccountType(other.to_string())),
        }
    }
}

/// Whether the account holder is a natural person or a legal entity.
///
/// Immutable after record creation. Constrains both the allowed key types
/// (see [`KeyType::allowed_for`]) and the per-account registration ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    /// A natural person (individual account holder).
    NaturalPerson,
    /// A legal entity (company account holder).
    LegalEntity,
}

impl PersonType {
    /// Returns the snake_case string identifier for this person type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NaturalPerson => "natural_person",
            Self::LegalEntity => "legal_entity",
        }
    }
}

impl std::fmt::Display for PersonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural_person" => Ok(Self::NaturalPerson),
            "legal_entity" => Ok(Self::LegalEntity),
            other => Err(FieldError::UnknownPersonType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type_count_matches_all_types() {
        assert_eq!(KeyType::all_types().len(), KEY_TYPE_COUNT);
    }

    #[test]
    fn test_key_type_as_str_from_str_roundtrip() {
        for kt in KeyType::all_types() {
            assert_eq!(KeyType::from_str(kt.as_str()).unwrap(), *kt);
        }
    }

    #[test]
    fn test_key_type_from_str_is_case_sensitive() {
        assert!(KeyType::from_str("CPF").is_err());
        assert!(KeyType::from_str("Cpf").is_err());
        assert!(KeyType::from_str("cpf ").is_err());
    }

    #[test]
    fn test_key_type_serde_matches_as_str() {
        for kt in KeyType::all_types() {
            let json = serde_json::to_string(kt).unwrap();
            assert_eq!(json, format!("\"{}\"", kt.as_str()));
        }
    }

    #[test]
    fn test_cpf_restricted_to_natural_person() {
        assert!(KeyType::Cpf.allowed_for(PersonType::NaturalPerson));
        assert!(!KeyType::Cpf.allowed_for(PersonType::LegalEntity));
    }

    #[test]
    fn test_cnpj_restricted_to_legal_entity() {
        assert!(KeyType::Cnpj.allowed_for(PersonType::LegalEntity));
        assert!(!KeyType::Cnpj.allowed_for(PersonType::NaturalPerson));
    }

    #[test]
    fn test_unrestricted_types_allowed_for_both() {
        for kt in [KeyType::Phone, KeyType::Email, KeyType::Random] {
            assert!(kt.allowed_for(PersonType::NaturalPerson));
            assert!(kt.allowed_for(PersonType::LegalEntity));
        }
    }

    #[test]
    fn test_person_type_roundtrip() {
        for pt in [PersonType::NaturalPerson, PersonType::LegalEntity] {
            assert_eq!(PersonType::from_str(pt.as_str()).unwrap(), pt);
        }
    }

    #[test]
    fn test_account_type_roundtrip() {
        for at in [AccountType::Checking, AccountType::Savings] {
            assert_eq!(AccountType::from_str(at.as_str()).unwrap(), at);
        }
    }
}
