//! Record add/delete handlers.
//!
//! Each request moves through parse, validate, store call, respond. A parse
//! or validation failure short-circuits to a 400 carrying every violated
//! constraint; a store failure maps to a 500 with a generic message. The CORS
//! layer on the router attaches origin headers on every path.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use recordbox_core::record::{validate_add, validate_delete, FieldError, StoredRecord};

use crate::{handlers::AppError, state::AppState};

/// Success body for add: confirmation plus the persisted record.
#[derive(Debug, Serialize)]
struct AddResponse {
    message: &'static str,
    item: StoredRecord,
}

/// Success body for delete: confirmation only.
#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// Failure body for parse and validation errors.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    message: &'static str,
    errors: Vec<FieldError>,
}

/// Add a record (POST /api/records).
///
/// Body: `{ hashKey, rangeKey, data? }`. Responds 200 with the persisted
/// item, 400 with field errors, or 500 on store failure.
pub async fn add_record(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return parse_failed(rejection),
    };

    let record = match validate_add(&body) {
        Ok(record) => record,
        Err(errors) => return validation_failed(errors),
    };

    match state.records.put(record).await {
        Ok(item) => {
            tracing::info!(
                hash_key = %item.hash_key,
                range_key = %item.range_key,
                "Record added"
            );
            (
                StatusCode::OK,
                Json(AddResponse {
                    message: "Record added successfully",
                    item,
                }),
            )
                .into_response()
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

/// Delete a record (DELETE /api/records).
///
/// Body: `{ hashKey, rangeKey }`. Deleting a non-existent key still responds
/// 200; the operation is idempotent.
pub async fn delete_record(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return parse_failed(rejection),
    };

    let record = match validate_delete(&body) {
        Ok(record) => record,
        Err(errors) => return validation_failed(errors),
    };

    match state
        .records
        .delete(&record.hash_key, &record.range_key)
        .await
    {
        Ok(()) => {
            tracing::info!(
                hash_key = %record.hash_key,
                range_key = %record.range_key,
                "Record deleted"
            );
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Record deleted successfully",
                }),
            )
                .into_response()
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

/// 400 for a body that never parsed; reported in the same shape as a
/// validation failure.
fn parse_failed(rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    tracing::warn!(error = %message, "Failed to parse request body");

    (
        StatusCode::BAD_REQUEST,
        Json(ValidationResponse {
            message: "Invalid request body",
            errors: vec![FieldError::new("body", message)],
        }),
    )
        .into_response()
}

/// 400 carrying every violated constraint.
fn validation_failed(errors: Vec<FieldError>) -> Response {
    tracing::warn!(errors = ?errors, "Validation failed");

    (
        StatusCode::BAD_REQUEST,
        Json(ValidationResponse {
            message: "Validation failed",
            errors,
        }),
    )
        .into_response()
}
