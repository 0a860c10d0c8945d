//! Schema validation for add/delete request bodies.
//!
//! Validators take the already-parsed JSON body and either produce a
//! validated input type or the full list of field-level violations. Every
//! violated constraint is reported, not just the first, so a client can fix
//! all problems in one round trip.

use serde_json::Value;

use super::types::{AddRecord, DeleteRecord, FieldError};

/// Minimum length of `hashKey` and `rangeKey`, in characters.
pub const KEY_MIN_LEN: usize = 5;
/// Maximum length of `hashKey` and `rangeKey`, in characters.
pub const KEY_MAX_LEN: usize = 100;
/// Maximum size of the serialized `data` payload, in bytes.
pub const MAX_PAYLOAD_BYTES: usize = 1000;

/// Validate an add request body.
///
/// Requires `hashKey` and `rangeKey` strings of 5-100 characters. An optional
/// `data` field of any JSON shape is serialized to a string; the serialized
/// form must not exceed 1000 bytes. Absent or `null` data means no payload.
pub fn validate_add(body: &Value) -> Result<AddRecord, Vec<FieldError>> {
    let mut errors = Vec::new();

    let hash_key = validate_key(body, "hashKey", &mut errors);
    let range_key = validate_key(body, "rangeKey", &mut errors);
    let payload = validate_data(body, &mut errors);

    if errors.is_empty() {
        Ok(AddRecord {
            // Both keys are Some when no errors were recorded
            hash_key: hash_key.unwrap_or_default(),
            range_key: range_key.unwrap_or_default(),
            payload,
        })
    } else {
        Err(errors)
    }
}

/// Validate a delete request body.
///
/// Requires `hashKey` and `rangeKey` only; any other fields are ignored.
pub fn validate_delete(body: &Value) -> Result<DeleteRecord, Vec<FieldError>> {
    let mut errors = Vec::new();

    let hash_key = validate_key(body, "hashKey", &mut errors);
    let range_key = validate_key(body, "rangeKey", &mut errors);

    if errors.is_empty() {
        Ok(DeleteRecord {
            hash_key: hash_key.unwrap_or_default(),
            range_key: range_key.unwrap_or_default(),
        })
    } else {
        Err(errors)
    }
}

/// Check a required key field: present, a string, and within length bounds.
fn validate_key(body: &Value, path: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match body.get(path) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(path, "is required"));
            None
        }
        Some(Value::String(s)) => {
            let len = s.chars().count();
            if len < KEY_MIN_LEN {
                errors.push(FieldError::new(
                    path,
                    format!("must be at least {KEY_MIN_LEN} characters"),
                ));
                None
            } else if len > KEY_MAX_LEN {
                errors.push(FieldError::new(
                    path,
                    format!("must be at most {KEY_MAX_LEN} characters"),
                ));
                None
            } else {
                Some(s.clone())
            }
        }
        Some(_) => {
            errors.push(FieldError::new(path, "must be a string"));
            None
        }
    }
}

/// Serialize the optional `data` field and enforce the payload size cap.
///
/// Absent and `null` both mean "no payload"; nothing is stored for them.
fn validate_data(body: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
    let data = match body.get("data") {
        None | Some(Value::Null) => return None,
        Some(data) => data,
    };

    let serialized = match serde_json::to_string(data) {
        Ok(s) => s,
        Err(err) => {
            errors.push(FieldError::new("data", format!("is not serializable: {err}")));
            return None;
        }
    };

    if serialized.len() > MAX_PAYLOAD_BYTES {
        errors.push(FieldError::new(
            "data",
            format!("serialized form must be at most {MAX_PAYLOAD_BYTES} bytes"),
        ));
        return None;
    }

    Some(serialized)
}
