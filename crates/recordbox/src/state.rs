//! Application state with store-backed persistence.
//!
//! The shared state passed to all request handlers: the immutable
//! configuration plus a single store client created at startup. The backend
//! is selected at compile time via feature flags.

use std::sync::Arc;

use recordbox_core::storage::RecordStore;

use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler. Holds the store as a trait object so
/// handlers never see the concrete backend or its client.
#[derive(Clone)]
pub struct AppState {
    /// Record store (backend selected by feature flag).
    pub records: Arc<dyn RecordStore>,
}

impl AppState {
    fn build(records: Arc<dyn RecordStore>) -> Self {
        Self { records }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local development and testing without AWS access.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::build(Arc::new(InMemoryStore::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbStore;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// Uses the AWS SDK default credential chain; the table name comes
        /// from configuration.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let store = DynamoDbStore::new(client, config.table_name.clone());

            Ok(Self::build(Arc::new(store)))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
