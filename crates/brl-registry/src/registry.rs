use brl_store::{KvScan, KvStore};
use brl_types::{Bond, BondIndex};
use tracing::{debug, info, warn};

use crate::error::{RegistryError, RegistryResult};

/// Well-known key under which the [`BondIndex`] is stored.
pub const BOND_INDEX_KEY: &str = "bond_index";

/// The record-management layer over a bare key/value store.
///
/// Holds no state of its own beyond the store handle: every operation reads
/// current state from the store at call time, and no lock is held across
/// calls. See the crate docs for the consistency model.
pub struct BondRegistry<S> {
    store: S,
}

impl<S> BondRegistry<S> {
    /// Wrap a store in a registry. The store is the only collaborator; the
    /// registry never touches anything else.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KvStore> BondRegistry<S> {
    /// Initialize the registry by writing an empty index.
    ///
    /// Deliberately destructive: running bootstrap against a store that
    /// already holds an index overwrites it with an empty one, discarding
    /// every entry. Existing bond records keep their keys but become
    /// invisible to [`list_all`](Self::list_all) until re-indexed. This
    /// mirrors the observable behavior of the original deployment and is
    /// preserved as-is; callers that need re-init safety must guard the call
    /// themselves.
    pub fn bootstrap(&self) -> RegistryResult<()> {
        let bytes = BondIndex::empty().to_bytes()?;
        self.store.put(BOND_INDEX_KEY, &bytes)?;
        info!(key = BOND_INDEX_KEY, "bootstrap: wrote empty bond index");
        Ok(())
    }

    /// Create a new bond record and append it to the index.
    ///
    /// Uniqueness is enforced by a read of the record key before the write.
    /// The store has no conditional put, so this check-then-write is racy:
    /// two concurrent creates of the same id can both observe absence and
    /// both succeed. Known limitation, inherited from the store's contract.
    ///
    /// The record and the index are two independent writes with no atomicity
    /// between them. A failure after the record write leaves an orphan: the
    /// key is occupied (so re-creation still fails `AlreadyExists`) but the
    /// id is absent from listings until [`reindex`](Self::reindex) runs.
    pub fn create(&self, bond: &Bond) -> RegistryResult<()> {
        if bond.real_estate_id.is_empty() {
            return Err(RegistryError::EmptyRealEstateId);
        }

        if self.store.get(&bond.real_estate_id)?.is_some() {
            debug!(key = %bond.real_estate_id, "create: key already occupied");
            return Err(RegistryError::AlreadyExists {
                key: bond.real_estate_id.clone(),
            });
        }

        // Record first, index second: an orphaned record is recoverable, a
        // dangling index entry would fail every listing.
        self.store.put(&bond.real_estate_id, &bond.to_bytes()?)?;

        let mut index = self.read_index()?;
        index.push(bond.real_estate_id.clone());
        self.store.put(BOND_INDEX_KEY, &index.to_bytes()?)?;

        debug!(key = %bond.real_estate_id, "create: bond written and indexed");
        Ok(())
    }

    /// Fetch the bond stored at `real_estate_id`.
    pub fn retrieve(&self, real_estate_id: &str) -> RegistryResult<Bond> {
        let bytes = self
            .store
            .get(real_estate_id)?
            .ok_or_else(|| RegistryError::NotFound {
                key: real_estate_id.to_string(),
            })?;

        Bond::from_bytes(&bytes).map_err(|e| {
            warn!(key = %real_estate_id, error = %e, "retrieve: undecodable bond record");
            RegistryError::CorruptRecord {
                key: real_estate_id.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Reassign a bond to a new owner.
    ///
    /// Whole-record rewrite: the current record is read, `owner_national_id`
    /// is replaced, and the record is written back under the same key. No
    /// check that the new owner differs from the old, and no authorization;
    /// both are outside this layer. On any retrieval failure nothing is
    /// written.
    pub fn transfer_ownership(
        &self,
        real_estate_id: &str,
        new_owner_national_id: &str,
    ) -> RegistryResult<()> {
        let mut bond = self.retrieve(real_estate_id)?;
        bond.owner_national_id = new_owner_national_id.to_string();
        self.store.put(real_estate_id, &bond.to_bytes()?)?;
        debug!(key = %real_estate_id, "transfer: owner rewritten");
        Ok(())
    }

    /// All bonds, in index (creation) order.
    ///
    /// Strict: if any indexed id fails to retrieve — missing record, corrupt
    /// bytes, transport failure — the whole listing fails. No partial
    /// results.
    pub fn list_all(&self) -> RegistryResult<Vec<Bond>> {
        let index = self.read_index()?;
        index.iter().map(|id| self.retrieve(id)).collect()
    }

    /// Whether `real_estate_id` is free to use for a new bond.
    ///
    /// Checks the record key directly, not the index, so orphaned records
    /// still count as taken. An occupied-but-corrupt record also counts as
    /// taken: the key is not usable either way.
    pub fn check_unique(&self, real_estate_id: &str) -> RegistryResult<bool> {
        Ok(self.store.get(real_estate_id)?.is_none())
    }

    /// Raw stored credential bytes for `name`.
    ///
    /// Credentials live beside bond records in the same keyspace and are
    /// passed through undecoded.
    pub fn get_credential(&self, name: &str) -> RegistryResult<Vec<u8>> {
        self.store
            .get(name)?
            .ok_or_else(|| RegistryError::CredentialNotFound {
                name: name.to_string(),
            })
    }

    /// Store raw credential bytes under `name`.
    pub fn put_credential(&self, name: &str, cert: &[u8]) -> RegistryResult<()> {
        self.store.put(name, cert)?;
        debug!(name = %name, "credential stored");
        Ok(())
    }

    fn read_index(&self) -> RegistryResult<BondIndex> {
        let bytes = self
            .store
            .get(BOND_INDEX_KEY)?
            .ok_or(RegistryError::IndexMissing)?;
        BondIndex::from_bytes(&bytes).map_err(|e| RegistryError::CorruptIndex {
            reason: e.to_string(),
        })
    }
}

impl<S: KvScan> BondRegistry<S> {
    /// Rebuild the index from a full key scan.
    ///
    /// Repair pass for the create path's two-write gap: every key whose
    /// value decodes as a bond and whose `real_estate_id` matches the key is
    /// re-indexed, in sorted key order. Only available where the backend can
    /// enumerate keys; the production store cannot, which is why the index
    /// is maintained incrementally in the first place.
    ///
    /// Returns the number of bonds indexed.
    pub fn reindex(&self) -> RegistryResult<usize> {
        let mut keys = self.store.keys()?;
        keys.sort();

        let mut index = BondIndex::empty();
        for key in keys {
            if key == BOND_INDEX_KEY {
                continue;
            }
            let Some(bytes) = self.store.get(&key)? else {
                continue;
            };
            match Bond::from_bytes(&bytes) {
                Ok(bond) if bond.real_estate_id == key => index.push(key),
                // Credentials and foreign values share the keyspace; skip
                // anything that is not a bond stored under its own id.
                _ => continue,
            }
        }

        let count = index.len();
        self.store.put(BOND_INDEX_KEY, &index.to_bytes()?)?;
        info!(count, "reindex: bond index rebuilt from key scan");
        Ok(count)
    }
}
