//! The [`KvStore`] trait defining the storage interface, plus the optional
//! [`KvScan`] extension for backends that can enumerate keys.

use std::sync::Arc;

use crate::error::StoreResult;

/// Single-key get/put storage.
///
/// This is the entire contract the external store offers. Implementations
/// must satisfy:
/// - `get` of a never-written key returns `Ok(None)`; errors are reserved
///   for transport and backend failures.
/// - `put` either durably stores the value or returns an error; it never
///   reports success for a lost write.
/// - No atomicity across keys, and no conditional writes. Callers that need
///   check-then-write sequences own the resulting race windows.
pub trait KvStore: Send + Sync {
    /// Read the value stored at `key`, or `None` if the key was never
    /// written.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` at `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;
}

/// Key enumeration for backends that support it.
///
/// The external production store cannot scan; this extension exists so that
/// embedded backends (and any future scan-capable store) can drive the
/// registry's index repair pass.
pub trait KvScan: KvStore {
    /// All keys currently present, in unspecified order.
    fn keys(&self) -> StoreResult<Vec<String>>;
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        (**self).put(key, value)
    }
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        (**self).put(key, value)
    }
}
