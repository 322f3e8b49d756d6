use poem_openapi::{payload::Json, ApiResponse};
use thiserror::Error;

use crate::errors::internal::{InternalError, ItemError};
use crate::types::dto::common::ErrorResponse;

/// Input validation failures for item request bodies
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The create body carried no itemName at all
    #[error("itemName is required")]
    MissingItemName,

    /// itemName was present but empty
    #[error("itemName must not be empty")]
    EmptyItemName,
}

/// Error responses for item endpoints
///
/// The only error shapes the item API can answer with; handlers produce
/// these via the `From` conversions below rather than building JSON inline.
#[derive(ApiResponse, Debug)]
pub enum ItemApiError {
    /// Request body failed validation
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// No item matches the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorResponse>),
}

impl ItemApiError {
    /// Create a Validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        ItemApiError::Validation(Json(ErrorResponse {
            error: message.into(),
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemApiError::NotFound(Json(ErrorResponse {
            error: "Item not found".to_string(),
        }))
    }

    /// Create an Internal error with a generic body
    pub fn internal_error() -> Self {
        ItemApiError::Internal(Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }))
    }

    /// The message carried in the response body
    pub fn message(&self) -> &str {
        match self {
            ItemApiError::Validation(Json(body)) => &body.error,
            ItemApiError::NotFound(Json(body)) => &body.error,
            ItemApiError::Internal(Json(body)) => &body.error,
        }
    }
}

impl From<ValidationError> for ItemApiError {
    fn from(err: ValidationError) -> Self {
        ItemApiError::validation(err.to_string())
    }
}

impl From<InternalError> for ItemApiError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Item(ItemError::NotFound(id)) => {
                tracing::debug!("Item lookup missed: {}", id);
                ItemApiError::not_found()
            }
            other => {
                // Full detail stays server-side, the client gets a generic body
                tracing::error!("Unhandled store error: {}", other);
                ItemApiError::internal_error()
            }
        }
    }
}
