use thiserror::Error;

/// Internal error type for store operations
///
/// Infrastructure errors (Database) are shared by any store; domain errors
/// (Item) belong to the item store. This type is NOT exposed via the API.
/// Endpoints must explicitly convert it to `ItemApiError` at the handler
/// boundary.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Item store errors
    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }
}

/// Item store specific errors
#[derive(Error, Debug)]
pub enum ItemError {
    /// No item matches the requested identifier
    #[error("Item not found: {0}")]
    NotFound(String),
}
