//! # pixkey-state — Key Record and Lifecycle
//!
//! Defines the `PixKey` record, its construction invariants, and the
//! two-state Active → Inactive lifecycle.
//!
//! ## Design
//!
//! The record is a value type with private fields. Immutable fields
//! (identity, key type, key value, creation time, person type) simply
//! have no post-construction setter; the mutable account field group is
//! replaced wholesale through [`PixKey::with_account`]. The lifecycle
//! invariant — `deactivated_at` is `Some` exactly when the record is
//! inactive — holds by construction because both fields change only
//! inside [`PixKey::deactivate`].
//!
//! There is no transition out of Inactive: deactivation is rejected on
//! an already-inactive record rather than absorbed as a no-op, and no
//! reactivation path is exposed.

pub mod key;

pub use key::{AccountUpdate, LifecycleError, NewKey, PixKey};
