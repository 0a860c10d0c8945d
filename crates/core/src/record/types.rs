use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted record as returned by the store.
///
/// `(hash_key, range_key)` uniquely identifies a record. The payload, when
/// present, is the serialized form of the caller's `data` value. The creation
/// timestamp is assigned by the store at write time, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    pub hash_key: String,
    pub range_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated add request: both keys plus the already-serialized payload.
///
/// Produced only by [`validate_add`](super::validate_add), so holders can rely
/// on the length constraints having been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRecord {
    pub hash_key: String,
    pub range_key: String,
    pub payload: Option<String>,
}

/// A validated delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecord {
    pub hash_key: String,
    pub range_key: String,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of the offending field in the request body (e.g. `hashKey`).
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
