use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct ProgressCapRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProgressCapRepository<'a, C> {
    /// Creates a new instance of [`ProgressCapRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<entity::progress_cap::Model>, DbErr> {
        entity::prelude::ProgressCap::find().all(self.db).await
    }
}
