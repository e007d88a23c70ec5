use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The append-only index of every `real_estate_id` ever created.
///
/// Stored as a single record under a well-known key. The index is the only
/// enumeration the store offers: `get`/`put` cannot scan, so listing all
/// bonds walks this sequence in insertion order. It is mutated exclusively by
/// the create path, which appends the new id after the bond record itself has
/// been written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondIndex {
    pub bond_ids: Vec<String>,
}

impl BondIndex {
    /// A fresh index with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a newly created id. No dedup pass: create's uniqueness check
    /// happens against the record key, before the index is touched.
    pub fn push(&mut self, real_estate_id: impl Into<String>) {
        self.bond_ids.push(real_estate_id.into());
    }

    pub fn len(&self) -> usize {
        self.bond_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bond_ids.is_empty()
    }

    /// Iterate ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.bond_ids.iter().map(String::as_str)
    }

    /// Encode this index as compact JSON bytes for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        serde_json::to_vec(self).map_err(|e| TypeError::Encode(e.to_string()))
    }

    /// Decode an index from stored bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_round_trips() {
        let index = BondIndex::empty();
        assert!(index.is_empty());
        let decoded = BondIndex::from_bytes(&index.to_bytes().unwrap()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut index = BondIndex::empty();
        index.push("100.1");
        index.push("100.2");
        index.push("200.1");
        assert_eq!(index.len(), 3);
        let ids: Vec<&str> = index.iter().collect();
        assert_eq!(ids, ["100.1", "100.2", "200.1"]);
    }

    #[test]
    fn duplicate_ids_are_kept_as_appended() {
        // The index itself never dedups; uniqueness is enforced upstream
        // against the record key.
        let mut index = BondIndex::empty();
        index.push("100.1");
        index.push("100.1");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn corrupt_index_bytes_fail_decode() {
        let err = BondIndex::from_bytes(b"{\"bond_ids\":").unwrap_err();
        assert!(matches!(err, TypeError::Decode(_)));
    }
}
