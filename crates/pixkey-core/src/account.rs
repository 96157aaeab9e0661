//! # Account Coordinate Newtypes
//!
//! Validated newtypes for the bank-account fields of a key record:
//! branch number, account number, and holder name. Constructors reject
//! out-of-range values at the boundary so the rest of the stack never
//! sees an invalid coordinate.
//!
//! ## Invariant
//!
//! A `BranchNumber` always holds a 4-digit value and an `AccountNumber`
//! an 8-digit value. There is no bypass constructor.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// A 4-digit bank branch number (1000–9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchNumber(u16);

impl BranchNumber {
    /// Lowest valid branch number.
    pub const MIN: u16 = 1000;
    /// Highest valid branch number.
    pub const MAX: u16 = 9999;

    /// Construct a branch number, rejecting values outside 1000–9999.
    pub fn new(value: u32) -> Result<Self, FieldError> {
        if value < Self::MIN as u32 || value > Self::MAX as u32 {
            return Err(FieldError::BranchOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u16))
    }

    /// The numeric branch value.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for BranchNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// An 8-digit bank account number (10000000–99999999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountNumber(u32);

impl AccountNumber {
    /// Lowest valid account number.
    pub const MIN: u32 = 10_000_000;
    /// Highest valid account number.
    pub const MAX: u32 = 99_999_999;

    /// Construct an account number, rejecting values outside the 8-digit range.
    pub fn new(value: u64) -> Result<Self, FieldError> {
        if value < Self::MIN as u64 || value > Self::MAX as u64 {
            return Err(FieldError::AccountOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u32))
    }

    /// The numeric account value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

/// Account holder name: required first name, optional last name.
///
/// First name is limited to 30 characters, last name to 45, matching the
/// registry's record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderName {
    first: String,
    last: Option<String>,
}

impl HolderName {
    /// Maximum first-name length in characters.
    pub const MAX_FIRST: usize = 30;
    /// Maximum last-name length in characters.
    pub const MAX_LAST: usize = 45;

    /// Construct a holder name, rejecting a blank first name and
    /// overlong components.
    pub fn new(first: impl Into<String>, last: Option<String>) -> Result<Self, FieldError> {
        let first = first.into();
        if first.trim().is_empty() {
            return Err(FieldError::HolderNameBlank);
        }
        let first_len = first.chars().count();
        if first_len > Self::MAX_FIRST {
            return Err(FieldError::HolderNameTooLong {
                len: first_len,
                max: Self::MAX_FIRST,
            });
        }
        if let Some(ref l) = last {
            let last_len = l.chars().count();
            if last_len > Self::MAX_LAST {
                return Err(FieldError::HolderLastNameTooLong {
                    len: last_len,
                    max: Self::MAX_LAST,
                });
            }
        }
        Ok(Self { first, last })
    }

    /// The holder's first name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The holder's last name, if recorded.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl std::fmt::Display for HolderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.last {
            Some(last) => write!(f, "{} {}", self.first, last),
            None => f.write_str(&self.first),
        }
    }
}
