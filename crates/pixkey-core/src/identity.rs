//! # Key Record Identity
//!
//! Newtype wrapper for the Pix key record identifier. Using a distinct
//! type keeps record ids from being confused with the key *value*
//! (which, for random keys, is also UUID-shaped).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a Pix key record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyId(pub Uuid);

impl KeyId {
    /// Generate a new random record identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for KeyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "key:{}", self.0)
    }
}
