use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorCode, ErrorDto};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No identity found in request headers, sign in through Cloudflare Access")]
    AuthenticationRequired,
}

impl AuthError {
    pub fn to_error_dto(&self) -> ErrorDto {
        match self {
            Self::AuthenticationRequired => ErrorDto {
                code: ErrorCode::AuthenticationRequired,
                message: self.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::UNAUTHORIZED, Json(self.to_error_dto())).into_response()
    }
}
