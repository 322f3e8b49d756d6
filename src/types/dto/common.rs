use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Error response body
///
/// Every failing endpoint answers with exactly this shape.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
