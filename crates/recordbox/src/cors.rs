//! CORS policy construction from the configured origin allow-list.
//!
//! The allow-list is fixed at process start. A request whose `Origin` header
//! matches a listed origin gets that origin echoed in
//! `Access-Control-Allow-Origin` together with
//! `Access-Control-Allow-Credentials: true`; any other origin gets no
//! origin-specific headers, so the browser blocks the cross-origin read.
//! Applied as a layer, the policy covers every exit path of the wrapped
//! routes, success and failure alike.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer for the API routes from the configured allow-list.
///
/// Origins that do not parse as header values are skipped with a warning
/// rather than failing startup.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Skipping invalid origin in allow-list");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
