use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use crate::server::error::{ledger::LedgerError, Error};

/// Converts a malformed request body, query string or path into a validation error.
pub fn invalid_input<R: std::fmt::Display>(rejection: R) -> Error {
    Error::LedgerError(LedgerError::InvalidInput {
        reason: rejection.to_string(),
    })
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        invalid_input(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        invalid_input(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        invalid_input(rejection.body_text())
    }
}
