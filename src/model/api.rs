use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine readable category of an API error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    Conflict,
    InternalError,
    AuthenticationRequired,
}

/// The response when an error occurs with an API request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Error category
    pub code: ErrorCode,
    /// Human readable error message
    pub message: String,
    /// Structured context for the error, such as the offending field and its bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl ErrorDto {
    /// Generic internal error body that exposes no implementation details
    pub fn internal() -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: "Internal server error".to_string(),
            details: None,
        }
    }
}
