//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `recordbox_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;

use recordbox_core::storage::StoreError;

/// Map a PutItem SDK error to StoreError.
///
/// Connectivity failures (dispatch, timeout) map to `ConnectionFailed`;
/// everything else is converted to the service error and mapped per variant.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    match err {
        SdkError::DispatchFailure(e) => StoreError::ConnectionFailed(format!("{e:?}")),
        SdkError::TimeoutError(_) => {
            StoreError::ConnectionFailed("Request timed out".to_string())
        }
        err => map_put_item_service_error(err),
    }
}

fn map_put_item_service_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::OperationFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::OperationFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::OperationFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::OperationFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::OperationFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    match err {
        SdkError::DispatchFailure(e) => StoreError::ConnectionFailed(format!("{e:?}")),
        SdkError::TimeoutError(_) => {
            StoreError::ConnectionFailed("Request timed out".to_string())
        }
        err => map_delete_item_service_error(err),
    }
}

fn map_delete_item_service_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            StoreError::OperationFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::OperationFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            StoreError::OperationFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            StoreError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::OperationFailed(format!("DeleteItem failed: {:?}", err)),
    }
}
