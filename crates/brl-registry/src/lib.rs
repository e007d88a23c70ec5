//! Core registry logic for the Bond Registry Ledger.
//!
//! [`BondRegistry`] owns the interpretation of the bytes in the key/value
//! store: the bond record schema, the uniqueness of `real_estate_id`, and
//! the consistency between records and the [`BondIndex`]. The store itself
//! offers nothing beyond single-key get/put, so every guarantee here is
//! built from (and limited by) those two primitives:
//!
//! - Uniqueness on create is check-then-write against the record key. With
//!   no conditional put available, two concurrent creates of the same id can
//!   both observe absence and both proceed; this race is documented on
//!   [`BondRegistry::create`] rather than papered over with a process-local
//!   lock the external store cannot honor.
//! - Create writes two keys (record, then index) with no atomicity between
//!   them. A failure in between leaves an orphaned record: absent from
//!   listings, but still occupying its key and still blocking re-creation.
//!   [`BondRegistry::reindex`] repairs this where the backend can scan.
//! - Listing is strict: one unreadable record fails the whole listing, never
//!   a silently shortened result.
//!
//! The registry is stateless between calls. Every operation starts by
//! reading current state from the store; nothing is cached.

pub mod error;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use registry::{BondRegistry, BOND_INDEX_KEY};
