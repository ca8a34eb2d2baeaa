//! Ledger service layer.
//!
//! `LedgerService` holds the consistency rules of the ledger: progress patches are merged
//! over the stored (or baseline) progress and validated against the configured caps before
//! anything is written, and team member lists are validated against the mode's slot count
//! and the student catalog before the members are replaced atomically.
//!
//! The service never retries; write handlers wrap calls in a
//! [`RetryContext`](crate::server::service::retry::RetryContext) instead.

mod student;
mod team;
pub mod validate;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

/// Service for student progress and team composition operations of a single user.
pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    /// Creates a new instance of LedgerService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}
