use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::{KvScan, KvStore};

/// In-memory, HashMap-based key/value store.
///
/// Intended for tests and embedding. All values are held in memory behind a
/// `RwLock`; data is lost when the store is dropped. Unlike the production
/// store it also supports key enumeration via [`KvScan`].
pub struct InMemoryKvStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryKvStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(map) => map.len(),
            Err(_) => 0,
        }
    }

    /// Returns `true` if no key has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries.
    pub fn clear(&self) {
        if let Ok(mut map) = self.entries.write() {
            map.clear();
        }
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for InMemoryKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut map = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

impl KvScan for InMemoryKvStore {
    fn keys(&self) -> StoreResult<Vec<String>> {
        let map = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(map.keys().cloned().collect())
    }
}

impl std::fmt::Debug for InMemoryKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKvStore")
            .field("key_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_of_missing_key_is_none() {
        let store = InMemoryKvStore::new();
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn put_then_get_returns_value() {
        let store = InMemoryKvStore::new();
        store.put("k", b"value").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(b"value".as_ref()));
    }

    #[test]
    fn put_overwrites_previous_value() {
        let store = InMemoryKvStore::new();
        store.put("k", b"old").unwrap();
        store.put("k", b"new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(b"new".as_ref()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keys_enumerates_all_written_keys() {
        let store = InMemoryKvStore::new();
        store.put("a", b"1").unwrap();
        store.put("b", b"2").unwrap();
        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn clear_removes_all() {
        let store = InMemoryKvStore::new();
        store.put("a", b"1").unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.get("a").unwrap().is_none());
    }

    #[test]
    fn boxed_store_delegates() {
        let store: Box<dyn KvStore> = Box::new(InMemoryKvStore::new());
        store.put("k", b"v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(b"v".as_ref()));
    }

    #[test]
    fn concurrent_access_is_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryKvStore::new());
        store.put("shared", b"data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let value = store.get("shared").unwrap();
                    assert_eq!(value.as_deref(), Some(b"data".as_ref()));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }
}
