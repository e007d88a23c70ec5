//! Invocation surface for the Bond Registry Ledger.
//!
//! An invocation is an operation name plus a positional list of string
//! arguments. This crate turns that loosely typed pair into a tagged
//! operation value — [`MutationOp`] for the mutating table, [`QueryOp`] for
//! the read-only one — validating the argument count at this single boundary
//! before any store access happens. Unknown names and arity mismatches are
//! the only failures; argument *contents* stay opaque all the way down.
//!
//! [`OperationResponse`] is the reply envelope shared by both tables.

pub mod error;
pub mod invocation;
pub mod response;

pub use error::{ProtocolError, ProtocolResult};
pub use invocation::{Invocation, MutationOp, QueryOp};
pub use response::{OperationResponse, PING_PAYLOAD};
