//! # pixkey-validation — Key Format Validation
//!
//! Implements the format contracts for the five Pix key types:
//!
//! - **Checksums** (`checksum.rs`): pure modulo-11 check-digit functions
//!   for the two national tax identifiers (CPF, CNPJ).
//!
//! - **Validators** (`validators.rs`): the `KeyValidator` trait and one
//!   stateless implementation per key type.
//!
//! - **Registry** (`registry.rs`): the key-type → validator mapping,
//!   assembled by explicit construction and immutable afterwards.
//!
//! ## Design
//!
//! Validators are independent and stateless; no validator depends on any
//! other. A *value* rejected by a validator and a key type with *no
//! registered validator* are distinct failures — the first is a user
//! error ([`InvalidKey`]), the second a deployment defect
//! ([`RegistryError::NotConfigured`]).
//!
//! ## Crate Policy
//!
//! - Depends only on `pixkey-core` internally.
//! - Malformed input never panics; every rejection is a typed error
//!   carrying the offending value.

pub mod checksum;
pub mod error;
pub mod registry;
pub mod validators;

pub use checksum::{cnpj_checksum_is_valid, cpf_checksum_is_valid};
pub use error::{InvalidKey, RegistryError};
pub use registry::ValidatorRegistry;
pub use validators::{
    CnpjValidator, CpfValidator, EmailValidator, KeyValidator, PhoneValidator, RandomKeyValidator,
};
