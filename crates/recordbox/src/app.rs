use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    cors::cors_layer,
    handlers::{
        health::{healthz, livez},
        records::{add_record, delete_record},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // API routes with the configured CORS policy; the layer wraps success and
    // failure responses alike
    let api_routes = Router::new()
        .route("/records", post(add_record).delete(delete_record))
        .layer(cors_layer(&config.allowed_origins));

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use recordbox_core::record::{AddRecord, StoredRecord};
    use recordbox_core::storage::{RecordStore, Result as StoreResult, StoreError};

    const ALLOWED_ORIGIN: &str = "https://app.example";

    fn test_config() -> Config {
        Config {
            table_name: "Database".to_string(),
            allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
        }
    }

    fn test_app() -> Router {
        create_app(AppState::default(), &test_config())
    }

    /// Store whose operations always fail, for driving the 500 path.
    struct FailingStore;

    #[async_trait]
    impl RecordStore for FailingStore {
        async fn put(&self, _record: AddRecord) -> StoreResult<StoredRecord> {
            Err(StoreError::OperationFailed(
                "Throughput exceeded, please retry".to_string(),
            ))
        }

        async fn delete(&self, _hash_key: &str, _range_key: &str) -> StoreResult<()> {
            Err(StoreError::OperationFailed(
                "Throughput exceeded, please retry".to_string(),
            ))
        }
    }

    fn failing_app() -> Router {
        let state = AppState {
            records: Arc::new(FailingStore),
        };
        create_app(state, &test_config())
    }

    fn json_request(method: Method, uri: &str, body: &Value, origin: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(origin) = origin {
            builder = builder.header("Origin", origin);
        }
        builder
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn response_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn error_paths(body: &Value) -> Vec<&str> {
        body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_add_record_with_data() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({
                    "hashKey": "user-001",
                    "rangeKey": "profile",
                    "data": { "name": "Ada" },
                }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["message"], "Record added successfully");
        assert_eq!(body["item"]["hashKey"], "user-001");
        assert_eq!(body["item"]["rangeKey"], "profile");
        assert_eq!(body["item"]["payload"], r#"{"name":"Ada"}"#);
        assert!(body["item"]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_add_record_without_data_omits_payload() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert!(body["item"].get("payload").is_none());
    }

    #[tokio::test]
    async fn test_add_record_short_hash_key() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "abc", "rangeKey": "profile" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["message"], "Validation failed");
        assert!(error_paths(&body).contains(&"hashKey"));
    }

    #[tokio::test]
    async fn test_add_record_oversized_data() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({
                    "hashKey": "user-001",
                    "rangeKey": "profile",
                    "data": { "blob": "x".repeat(2000) },
                }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(error_paths(&body).contains(&"data"));
    }

    #[tokio::test]
    async fn test_add_record_reports_all_errors() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "abc" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(error_paths(&body), vec!["hashKey", "rangeKey"]);
    }

    #[tokio::test]
    async fn test_add_record_malformed_body() {
        let app = test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/records")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["message"], "Invalid request body");
        assert_eq!(error_paths(&body), vec!["body"]);
    }

    // Overwriting an existing key pair succeeds silently: deliberate
    // last-write-wins semantics, no conflict detection.
    #[tokio::test]
    async fn test_add_record_overwrites_silently() {
        let app = test_app();

        for payload in ["first", "second"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/api/records",
                    &json!({
                        "hashKey": "user-001",
                        "rangeKey": "profile",
                        "data": payload,
                    }),
                    None,
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_delete_record() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(json_request(
                Method::DELETE,
                "/api/records",
                &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["message"], "Record deleted successfully");
    }

    #[tokio::test]
    async fn test_delete_record_is_idempotent() {
        let app = test_app();

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::DELETE,
                    "/api/records",
                    &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                    None,
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_delete_record_missing_range_key() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::DELETE,
                "/api/records",
                &json!({ "hashKey": "user-001" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert!(error_paths(&body).contains(&"rangeKey"));
    }

    #[tokio::test]
    async fn test_add_record_store_failure_returns_500() {
        let app = failing_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                Some(ALLOWED_ORIGIN),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // The CORS policy covers the failure exit path too
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            ALLOWED_ORIGIN
        );

        let body = response_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(
            body["error"],
            "Operation failed: Throughput exceeded, please retry"
        );
    }

    #[tokio::test]
    async fn test_delete_record_store_failure_returns_500() {
        let app = failing_app();

        let response = app
            .oneshot(json_request(
                Method::DELETE,
                "/api/records",
                &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_cors_allowed_origin_is_echoed() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                Some(ALLOWED_ORIGIN),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            ALLOWED_ORIGIN
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-credentials")
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_cors_headers_present_on_validation_failure() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "abc", "rangeKey": "profile" }),
                Some(ALLOWED_ORIGIN),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            ALLOWED_ORIGIN
        );
    }

    #[tokio::test]
    async fn test_cors_unlisted_origin_gets_no_headers() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                Some("https://evil.example"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_absent_origin_gets_no_headers() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/records",
                &json!({ "hashKey": "user-001", "rangeKey": "profile" }),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }

    #[tokio::test]
    async fn test_livez() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
