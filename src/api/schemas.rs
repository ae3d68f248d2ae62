use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for successful responses
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true on success
    #[schema(example = true)]
    pub success: bool,
    /// Payload
    pub data: T,
}

/// Envelope for failed responses
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false on failure
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable message
    #[schema(example = "title: must not be empty")]
    pub message: String,
}
