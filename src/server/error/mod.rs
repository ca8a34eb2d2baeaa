//! Error types for the ledger server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (ledger rules, authentication, configuration). All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod ledger;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorCode, ErrorDto},
    server::error::{auth::AuthError, config::ConfigError, ledger::LedgerError},
};

/// Main error type for the ledger server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (no identity in the request headers)
/// - Ledger errors (validation, not found, conflict and integrity failures)
/// - Database errors (passed through untouched from the repositories)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no usable identity in the request).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Ledger rule violation or lookup failure.
    #[error(transparent)]
    LedgerError(#[from] LedgerError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error with the ledger's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Wire representation of the error.
    ///
    /// Store failures and internal bugs collapse into a generic internal error so no driver
    /// text reaches the client.
    pub fn to_error_dto(&self) -> ErrorDto {
        match self {
            Self::AuthError(err) => err.to_error_dto(),
            Self::LedgerError(err) => err.to_error_dto(),
            _ => ErrorDto::internal(),
        }
    }
}

/// HTTP status for each error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        ErrorCode::AuthenticationRequired => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Ledger validation failures and malformed requests
/// - 401 Unauthorized - No identity present in the request headers
/// - 404 Not Found - Missing students or teams
/// - 409 Conflict - Duplicate positions or students within a team
/// - 500 Internal Server Error - Integrity failures and all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::LedgerError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto::internal())).into_response()
    }
}
