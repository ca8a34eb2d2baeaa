use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration read from the environment is unusable
#[derive(Error, Debug)]
pub enum ConfigError {
    /// None of the connection string variables is set to a non-blank value.
    #[error("No database connection string configured, set one of: {}", .checked.join(", "))]
    MissingDatabaseUrl { checked: Vec<String> },
    #[error("{var} has an unusable value: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
