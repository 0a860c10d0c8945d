//! Storage contract for record persistence.
//!
//! The concrete backends (DynamoDB, in-memory) live in the `recordbox`
//! binary crate and implement [`RecordStore`].

mod error;
mod traits;

pub use error::{Result, StoreError};
pub use traits::RecordStore;
