//! HTTP server for the Bond Registry Ledger.
//!
//! Exposes the two invocation tables over HTTP: `POST /v1/invoke` for the
//! mutating table and `POST /v1/query` for the read-only one, each taking an
//! [`Invocation`](brl_protocol::Invocation) body and answering with an
//! [`OperationResponse`](brl_protocol::OperationResponse) envelope.
//! Malformed invocations (unknown name, wrong arity) are rejected with 400
//! before any store access; domain failures travel inside the envelope with
//! status 200, mirroring how the original transport surfaced them.
//!
//! On startup the server runs the registry bootstrap, which writes an empty
//! index — destructively, by design — and seeds any credentials named in the
//! configuration.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{SeedCredential, ServerConfig};
pub use dispatch::Dispatcher;
pub use error::{ServerError, ServerResult};
pub use server::BondServer;
