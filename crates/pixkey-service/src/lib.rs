//! # pixkey-service — Registration Workflow and Business Rules
//!
//! Orchestrates the Pix key workflows over the validation and state
//! crates:
//!
//! - **Ports** (`ports.rs`): the storage collaborator contracts — the
//!   uniqueness/limit oracles and the record store.
//!
//! - **Policy** (`policy.rs`): the per-person-type registration ceilings
//!   and phone country code, with national defaults and YAML loading.
//!
//! - **Filter** (`filter.rs`): search-filter validation, rejecting
//!   incoherent combinations before they reach storage.
//!
//! - **Service** (`service.rs`): the registration workflow (compatibility
//!   → format → uniqueness → limit → persist, short-circuiting on first
//!   failure) plus the deactivate, get, update, and search workflows.
//!
//! - **Memory store** (`memory.rs`): an in-memory reference
//!   implementation of the ports, used by tests and the CLI demo.
//!
//! ## Concurrency
//!
//! The workflows are synchronous and perform no writes before the single
//! persist step. Check-then-persist atomicity across concurrent callers
//! is owned by the store: a store that detects an active-value collision
//! at save time reports it, and the workflow surfaces it as the same
//! duplicate-key rejection as an oracle hit.

pub mod error;
pub mod filter;
pub mod memory;
pub mod policy;
pub mod ports;
pub mod service;

pub use error::{RegistrationError, ServiceError};
pub use filter::{FilterError, QueryFilter, SearchFilter};
pub use memory::MemoryKeyStore;
pub use policy::{KeyPolicy, PolicyError};
pub use ports::{KeyDirectory, KeyStore, StoreError};
pub use service::KeyService;
