//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! record type. These are testable in isolation without DynamoDB access. The
//! attribute names here are the only place the physical encoding appears.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};

use recordbox_core::record::StoredRecord;
use recordbox_core::storage::StoreError;

pub const ATTR_HASH_KEY: &str = "DemoHashKey";
pub const ATTR_RANGE_KEY: &str = "DemoRangeKey";
pub const ATTR_PAYLOAD: &str = "payload";
pub const ATTR_CREATED_AT: &str = "createdAt";

/// Convert a StoredRecord to a DynamoDB item.
///
/// An absent payload writes no payload attribute at all.
pub fn record_to_item(record: &StoredRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        ATTR_HASH_KEY.to_string(),
        AttributeValue::S(record.hash_key.clone()),
    );
    item.insert(
        ATTR_RANGE_KEY.to_string(),
        AttributeValue::S(record.range_key.clone()),
    );
    if let Some(payload) = &record.payload {
        item.insert(ATTR_PAYLOAD.to_string(), AttributeValue::S(payload.clone()));
    }
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::S(record.created_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item back to a StoredRecord.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<StoredRecord, StoreError> {
    Ok(StoredRecord {
        hash_key: get_string(item, ATTR_HASH_KEY)?,
        range_key: get_string(item, ATTR_RANGE_KEY)?,
        payload: get_optional_string(item, ATTR_PAYLOAD)?,
        created_at: get_datetime(item, ATTR_CREATED_AT)?,
    })
}

/// Build the composite key map for delete operations.
pub fn record_key(hash_key: &str, range_key: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            ATTR_HASH_KEY.to_string(),
            AttributeValue::S(hash_key.to_string()),
        ),
        (
            ATTR_RANGE_KEY.to_string(),
            AttributeValue::S(range_key.to_string()),
        ),
    ])
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| StoreError::Serialization(format!("Missing or invalid attribute: {key}")))
}

fn get_optional_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<String>, StoreError> {
    match item.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_s()
            .ok()
            .cloned()
            .map(Some)
            .ok_or_else(|| StoreError::Serialization(format!("Invalid attribute: {key}"))),
    }
}

fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, StoreError> {
    let raw = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Serialization(format!("Invalid timestamp in {key}: {e}")))
}
