use sea_orm::{sqlx, DbErr, RuntimeErr};

use super::Error;

/// SQLSTATE codes worth another attempt outside the `08` connection exception class
const TRANSIENT_SQLSTATES: [&str; 4] = [
    "53300", // too_many_connections
    "57P01", // admin_shutdown
    "57P02", // crash_shutdown
    "57P03", // cannot_connect_now
];

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient store failures)
    Retry,
    /// Failed permanently (bad request, rule violation, bug)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - pool exhausted or closed
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - server unreachable or dropped
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                // Statement failures are only transient when the driver reports a lost
                // connection or a server that is shutting down
                DbErr::Exec(RuntimeErr::SqlxError(err))
                | DbErr::Query(RuntimeErr::SqlxError(err)) => {
                    if is_transient_sqlx_error(err) {
                        ErrorRetryStrategy::Retry
                    } else {
                        ErrorRetryStrategy::Fail
                    }
                }

                // All other database errors are permanent failures:
                // - Constraint violations, syntax errors
                // - Type conversion errors
                // - Record not found/inserted/updated
                _ => ErrorRetryStrategy::Fail,
            },

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Auth errors - the same headers produce the same result
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Ledger errors - rule violations and missing rows
            Self::LedgerError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within the server's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,

            // Listener errors only occur outside of request handling
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

/// Whether a driver error signals a lost or refused connection
fn is_transient_sqlx_error(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| is_transient_sqlstate(&code)),
        _ => false,
    }
}

/// Whether a PostgreSQL SQLSTATE code marks a transient failure
pub fn is_transient_sqlstate(code: &str) -> bool {
    code.starts_with("08") || TRANSIENT_SQLSTATES.contains(&code)
}
