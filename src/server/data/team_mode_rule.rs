use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct TeamModeRuleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamModeRuleRepository<'a, C> {
    /// Creates a new instance of [`TeamModeRuleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, mode: &str) -> Result<Option<entity::team_mode_rule::Model>, DbErr> {
        entity::prelude::TeamModeRule::find_by_id(mode.to_string())
            .one(self.db)
            .await
    }
}
