//! Storage backend implementations.
//!
//! Concrete implementations of `recordbox_core::storage::RecordStore`,
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory backend for local development and tests
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p recordbox --no-default-features --features dynamodb
//! ```

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;
