use async_trait::async_trait;

use crate::record::{AddRecord, StoredRecord};

use super::Result;

/// Store for record put/delete operations.
///
/// Implementations own the translation between the logical record and the
/// physical storage representation; callers never see the storage client or
/// its encoding.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Writes a record, assigning the creation timestamp.
    ///
    /// A put with an existing `(hash_key, range_key)` pair overwrites it
    /// silently. Returns the persisted representation.
    async fn put(&self, record: AddRecord) -> Result<StoredRecord>;

    /// Deletes a record by its composite key.
    ///
    /// Deleting a non-existent key is not an error.
    async fn delete(&self, hash_key: &str, range_key: &str) -> Result<()>;
}
