//! Foundation types for the Bond Registry Ledger (BRL).
//!
//! This crate provides the record schema shared by every other BRL crate,
//! together with the byte codec used to persist records in the key/value
//! store.
//!
//! # Key Types
//!
//! - [`Bond`] — A single real-estate ownership record, keyed by its
//!   `real_estate_id`
//! - [`BondIndex`] — The append-only list of every known `real_estate_id`,
//!   stored as one record under a well-known key
//! - [`TypeError`] — Codec failures, with encode and decode kept distinct
//!
//! The codec is compact JSON: a stable, complete mapping of every field, so
//! that bytes written by one version of the system decode unchanged by
//! another. Decoding malformed bytes fails with [`TypeError::Decode`]
//! ("corrupt record"), which callers must keep distinct from "record absent".

pub mod bond;
pub mod error;
pub mod index;

pub use bond::{Bond, Borders, Coordinates};
pub use error::TypeError;
pub use index::BondIndex;
