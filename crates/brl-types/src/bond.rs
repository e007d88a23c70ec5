use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A single real-estate ownership record.
///
/// Every field is a caller-supplied opaque string; the registry validates
/// none of them beyond requiring a non-empty `real_estate_id`. `status` is
/// free text by convention ("flat", "built", ...) and is deliberately not an
/// enum: the original dataset carries values outside any fixed set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    /// Caller-supplied record identifier. Opaque; not used as a storage key.
    pub id: String,
    /// Storage key for this record, format `blueprint.parcel` (e.g. "1232.21").
    /// Must be unique across all live records.
    pub real_estate_id: String,
    /// National id of the current owner. The only field mutated after
    /// creation, via ownership transfer.
    pub owner_national_id: String,
    pub status: String,
    pub area: String,
    pub coordinates: Coordinates,
    pub borders: Borders,
}

/// Geographic position of a bond's parcel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub long: String,
    pub lat: String,
}

/// The four border descriptors of a bond's parcel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
}

impl Bond {
    /// Encode this bond as compact JSON bytes for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TypeError> {
        serde_json::to_vec(self).map_err(|e| TypeError::Encode(e.to_string()))
    }

    /// Decode a bond from stored bytes.
    ///
    /// Fails with [`TypeError::Decode`] on malformed or truncated input;
    /// callers surface this as a corrupt record, distinct from key-absent.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Decode(e.to_string()))
    }
}
