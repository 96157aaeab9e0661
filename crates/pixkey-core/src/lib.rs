//! # pixkey-core — Foundational Types for the Pix Key Stack
//!
//! This crate is the bedrock of the Pix key stack. It defines the
//! type-system primitives that enforce correctness guarantees at compile
//! time. Every other crate in the workspace depends on `pixkey-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `KeyId`, `BranchNumber`,
//!    `AccountNumber`, `HolderName` — all newtypes with validated
//!    constructors. No bare integers or strings for account coordinates.
//!
//! 2. **Closed taxonomies as enums.** `KeyType`, `AccountType`, and
//!    `PersonType` are exhaustive enums. Adding a key type forces every
//!    `match` in the workspace to handle it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so `created_at`/`deactivated_at`
//!    comparisons are timezone-unambiguous.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pixkey-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod account;
pub mod domain;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use account::{AccountNumber, BranchNumber, HolderName};
pub use domain::{AccountType, KeyType, PersonType, KEY_TYPE_COUNT};
pub use error::FieldError;
pub use identity::KeyId;
pub use temporal::Timestamp;
