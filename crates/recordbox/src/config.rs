use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the backing table (default: "Database")
    pub table_name: String,
    /// Origins allowed to receive cross-origin response headers.
    /// Empty means no origin gets cross-origin access (default).
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Backing table name (default: "Database")
    /// - `ALLOWED_ORIGINS` - JSON array or comma-separated list of origins
    ///   permitted for cross-origin requests (default: empty)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "Database".to_string()),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parse the origin allow-list from its environment representation.
///
/// Accepts a JSON array (`["https://a.example","https://b.example"]`) or a
/// comma-separated list. Whitespace and empty entries are dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    if let Ok(origins) = serde_json::from_str::<Vec<String>>(raw) {
        return origins;
    }

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
