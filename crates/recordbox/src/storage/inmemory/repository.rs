//! In-memory `RecordStore` implementation.
//!
//! Backs the service during local development and in tests, with the same
//! silent-overwrite and idempotent-delete semantics as the DynamoDB backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use recordbox_core::record::{AddRecord, StoredRecord};
use recordbox_core::storage::{RecordStore, Result};

/// In-memory record store keyed by the composite `(hash_key, range_key)`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<(String, String), StoredRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn put(&self, record: AddRecord) -> Result<StoredRecord> {
        let stored = StoredRecord {
            hash_key: record.hash_key,
            range_key: record.range_key,
            payload: record.payload,
            created_at: Utc::now(),
        };

        let mut records = self.records.write().await;
        records.insert(
            (stored.hash_key.clone(), stored.range_key.clone()),
            stored.clone(),
        );

        Ok(stored)
    }

    async fn delete(&self, hash_key: &str, range_key: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(&(hash_key.to_string(), range_key.to_string()));

        Ok(())
    }
}
