//! Record data model and schema validation.

mod types;
mod validate;

pub use types::{AddRecord, DeleteRecord, FieldError, StoredRecord};
pub use validate::{validate_add, validate_delete, KEY_MAX_LEN, KEY_MIN_LEN, MAX_PAYLOAD_BYTES};
