use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::auth::ExternalIdentity;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the user linked to an external identity by provider and subject
    pub async fn find_by_external_identity(
        &self,
        identity: &ExternalIdentity,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ExternalProvider.eq(identity.provider.as_str()))
            .filter(entity::user::Column::ExternalSubject.eq(identity.subject.as_str()))
            .one(self.db)
            .await
    }

    /// Creates a new user for an external identity
    ///
    /// Fails with a unique constraint violation if the identity already has a user.
    pub async fn create(&self, identity: &ExternalIdentity) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            external_provider: ActiveValue::Set(identity.provider.clone()),
            external_subject: ActiveValue::Set(identity.subject.clone()),
            external_email: ActiveValue::Set(identity.email.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }
}
