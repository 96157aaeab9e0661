//! # Search-Filter Validation
//!
//! Rejects incoherent search-filter combinations before they reach the
//! storage collaborator. This validator performs no I/O; it turns a raw
//! [`QueryFilter`] into a normalized [`SearchFilter`] or a typed
//! rejection.
//!
//! ## Rules
//!
//! - created-after and deactivated-after are mutually exclusive
//!   (ambiguous temporal intent).
//! - At least one filter field must be present (prevents an unbounded
//!   full scan at this layer).
//! - The key-type token must match a variant name exactly,
//!   case-sensitively.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use pixkey_core::{AccountNumber, BranchNumber, KeyType, Timestamp};

/// An incoherent search-filter combination.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The filter combination is not answerable.
    #[error("invalid filter combination: {0}")]
    InvalidCombination(String),
}

/// Raw search parameters, all optional, as received from a caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Key-type token; matched case-sensitively against variant names.
    pub key_type: Option<String>,
    /// Branch filter (exact).
    pub branch: Option<BranchNumber>,
    /// Account-number filter (exact).
    pub account: Option<AccountNumber>,
    /// Holder first-name filter (exact).
    pub holder_name: Option<String>,
    /// Only records created at or after this instant.
    pub created_after: Option<Timestamp>,
    /// Only records deactivated at or after this instant.
    pub deactivated_after: Option<Timestamp>,
}

impl QueryFilter {
    /// Validate the combination and produce the normalized filter the
    /// storage collaborator consumes.
    pub fn validate(self) -> Result<SearchFilter, FilterError> {
        if self.created_after.is_some() && self.deactivated_after.is_some() {
            return Err(FilterError::InvalidCombination(
                "created-after and deactivated-after cannot be combined".to_string(),
            ));
        }

        if self.is_empty() {
            return Err(FilterError::InvalidCombination(
                "at least one filter must be provided".to_string(),
            ));
        }

        let key_type = match self.key_type {
            Some(token) => Some(
                KeyType::from_str(&token)
                    .map_err(|e| FilterError::InvalidCombination(e.to_string()))?,
            ),
            None => None,
        };

        Ok(SearchFilter {
            key_type,
            branch: self.branch,
            account: self.account,
            holder_name: self.holder_name,
            created_after: self.created_after,
            deactivated_after: self.deactivated_after,
        })
    }

    fn is_empty(&self) -> bool {
        self.key_type.is_none()
            && self.branch.is_none()
            && self.account.is_none()
            && self.holder_name.is_none()
            && self.created_after.is_none()
            && self.deactivated_after.is_none()
    }
}

/// A validated, normalized search filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Parsed key-type filter.
    pub key_type: Option<KeyType>,
    /// Branch filter (exact).
    pub branch: Option<BranchNumber>,
    /// Account-number filter (exact).
    pub account: Option<AccountNumber>,
    /// Holder first-name filter (exact).
    pub holder_name: Option<String>,
    /// Only records created at or after this instant.
    pub created_after: Option<Timestamp>,
    /// Only records deactivated at or after this instant.
    pub deactivated_after: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn test_both_temporal_filters_rejected() {
        let filter = QueryFilter {
            created_after: Some(ts("2026-01-01T00:00:00Z")),
            deactivated_after: Some(ts("2026-02-01T00:00:00Z")),
            ..QueryFilter::default()
        };
        let err = filter.validate().unwrap_err();
        assert!(matches!(err, FilterError::InvalidCombination(_)));
    }

    #[test]
    fn test_empty_filter_rejected() {
        let err = QueryFilter::default().validate().unwrap_err();
        let FilterError::InvalidCombination(reason) = err;
        assert!(reason.contains("at least one"), "unexpected reason: {reason}");
    }

    #[test]
    fn test_unknown_key_type_token_rejected() {
        let filter = QueryFilter {
            key_type: Some("voucher".to_string()),
            ..QueryFilter::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_key_type_token_is_case_sensitive() {
        let filter = QueryFilter {
            key_type: Some("CPF".to_string()),
            ..QueryFilter::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_single_field_filters_normalize() {
        let normalized = QueryFilter {
            key_type: Some("cpf".to_string()),
            ..QueryFilter::default()
        }
        .validate()
        .unwrap();
        assert_eq!(normalized.key_type, Some(KeyType::Cpf));

        let normalized = QueryFilter {
            branch: Some(BranchNumber::new(1234).unwrap()),
            ..QueryFilter::default()
        }
        .validate()
        .unwrap();
        assert_eq!(normalized.branch.unwrap().get(), 1234);

        let normalized = QueryFilter {
            deactivated_after: Some(ts("2026-02-01T00:00:00Z")),
            ..QueryFilter::default()
        }
        .validate()
        .unwrap();
        assert!(normalized.deactivated_after.is_some());
    }
}
