//! Chops & Chips Cart - the shopper's cart store.
//!
//! Holds the authoritative in-memory representation of the current shopper's
//! selections and mirrors it, best-effort, into local persistent storage so a
//! restart picks up where the session left off.
//!
//! # Design
//!
//! The store is split into three pieces so the business rules stay trivially
//! unit-testable:
//!
//! - [`CartAggregate`] - the ordered set of lines plus the derived total,
//!   nothing else
//! - [`reducer::apply`] - a pure `(aggregate, action) -> aggregate` function
//!   carrying all mutation rules
//! - [`CartStore`] - an explicitly constructed object owning the aggregate
//!   and notifying observers after each change; persistence is one such
//!   observer, not a side effect baked into the operations
//!
//! There is no ambient global: every screen receives the store by reference.
//! All operations run to completion on the single UI thread, so the store
//! needs no locking and the latest operation always observes all prior ones.
//!
//! Persistence is advisory. A failed write is logged and the in-memory
//! aggregate stays authoritative for the rest of the session; a missing or
//! malformed persisted cart restores as empty, never as an error.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod reducer;
pub mod storage;
pub mod store;

pub use aggregate::CartAggregate;
pub use chops_and_chips_core::CartLine;
pub use reducer::CartAction;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{CART_STORAGE_KEY, CartObserver, CartStore, StoragePersister};
