//! DynamoDB `RecordStore` implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use chrono::Utc;

use recordbox_core::record::{AddRecord, StoredRecord};
use recordbox_core::storage::{RecordStore, Result};

use super::conversions::{record_key, record_to_item};
use super::error::{map_delete_item_error, map_put_item_error};

/// DynamoDB-backed record store.
///
/// Addressed purely through the table name supplied at construction; the
/// client and its configuration never leak to callers.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn put(&self, record: AddRecord) -> Result<StoredRecord> {
        let stored = StoredRecord {
            hash_key: record.hash_key,
            range_key: record.range_key,
            payload: record.payload,
            created_at: Utc::now(),
        };

        // No condition expression: a put on an existing key pair overwrites
        // it silently.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(&stored)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(stored)
    }

    async fn delete(&self, hash_key: &str, range_key: &str) -> Result<()> {
        // Unconditional delete: a missing key pair is not an error.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(record_key(hash_key, range_key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
