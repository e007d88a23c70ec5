//! Key/value storage boundary for the Bond Registry Ledger.
//!
//! The durable store backing BRL is an external black box reachable only
//! through single-key `get` and `put`. There are no transactions, no
//! multi-key atomicity, no conditional writes, and no uniqueness
//! constraints; everything the registry guarantees is built on top of these
//! two primitives.
//!
//! # Storage Backends
//!
//! All backends implement the [`KvStore`] trait:
//!
//! - [`InMemoryKvStore`] — `HashMap`-based store for tests and embedding
//!
//! Backends that can additionally enumerate their keys implement [`KvScan`],
//! which the registry's index repair pass requires.
//!
//! # Design Rules
//!
//! 1. Absence is data, not failure: `get` of a never-written key is
//!    `Ok(None)`, never an error.
//! 2. Write failures are propagated, never silently swallowed.
//! 3. The store never interprets values — it moves opaque bytes.
//! 4. Implementations are thread-safe (`Send + Sync`); the registry layers
//!    no locking of its own on top.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryKvStore;
pub use traits::{KvScan, KvStore};
