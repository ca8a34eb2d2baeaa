//! User service layer.
//!
//! Users are never registered explicitly: the first authenticated request of an external
//! identity creates its user row.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository, error::Error, model::auth::ExternalIdentity,
};

/// Service for resolving external identities to ledger users.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user for an external identity, creating it on first use.
    ///
    /// Two concurrent first requests of the same identity race on the unique
    /// `(external_provider, external_subject)` index; the loser re-reads the winner's row.
    ///
    /// # Arguments
    /// - `identity` - Provider, subject and optional email from the request headers
    ///
    /// # Returns
    /// - `Ok(Model)` - Existing or newly created user
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::InternalError)` - Insert reported a duplicate but no row could be read back
    pub async fn get_or_create_user(
        &self,
        identity: &ExternalIdentity,
    ) -> Result<entity::user::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_external_identity(identity).await? {
            return Ok(user);
        }

        match user_repo.create(identity).await {
            Ok(user) => {
                tracing::info!(
                    user_id = user.id,
                    provider = %identity.provider,
                    "Created user for new external identity"
                );

                Ok(user)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!(
                    provider = %identity.provider,
                    "User was created concurrently, reading existing row"
                );

                user_repo
                    .find_by_external_identity(identity)
                    .await?
                    .ok_or_else(|| {
                        Error::InternalError(format!(
                            "User for provider {} reported as duplicate but not found",
                            identity.provider
                        ))
                    })
            }
            Err(err) => Err(err.into()),
        }
    }
}
