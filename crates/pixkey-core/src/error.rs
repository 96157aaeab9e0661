//! # Field Errors — Structured Construction Failures
//!
//! Defines the error type returned by validated field constructors in
//! this crate. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! Every variant carries the offending value so callers can reconstruct
//! a precise user message without re-deriving context.

use thiserror::Error;

/// A field-level construction failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Branch number outside the 4-digit range.
    #[error("branch number must be between {min} and {max}, got {value}")]
    BranchOutOfRange {
        /// The rejected value.
        value: u32,
        /// Lower bound (inclusive).
        min: u16,
        /// Upper bound (inclusive).
        max: u16,
    },

    /// Account number outside the 8-digit range.
    #[error("account number must be between {min} and {max}, got {value}")]
    AccountOutOfRange {
        /// The rejected value.
        value: u64,
        /// Lower bound (inclusive).
        min: u32,
        /// Upper bound (inclusive).
        max: u32,
    },

    /// Holder first name is empty or whitespace-only.
    #[error("holder first name must not be blank")]
    HolderNameBlank,

    /// Holder first name exceeds the maximum length.
    #[error("holder first name must not exceed {max} characters, got {len}")]
    HolderNameTooLong {
        /// Actual character count.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// Holder last name exceeds the maximum length.
    #[error("holder last name must not exceed {max} characters, got {len}")]
    HolderLastNameTooLong {
        /// Actual character count.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// Unrecognized key-type token.
    #[error("unknown key type: {0:?}, must be one of: cpf, cnpj, phone, email, random")]
    UnknownKeyType(String),

    /// Unrecognized account-type token.
    #[error("unknown account type: {0:?}, must be one of: checking, savings")]
    UnknownAccountType(String),

    /// Unrecognized person-type token.
    #[error("unknown person type: {0:?}, must be one of: natural_person, legal_entity")]
    UnknownPersonType(String),

    /// Timestamp string failed to parse or used a non-UTC offset.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
