use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_EMAIL, TEST_PROVIDER},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

/// Create a progress model holding the default values for a new record.
///
/// Tests adjust the returned fields before inserting it with
/// [`UserFixtures::insert_progress`].
pub fn mock_progress(user_id: i32, student_id: &str) -> entity::user_student_progress::Model {
    let now = Utc::now().naive_utc();
    entity::user_student_progress::Model {
        user_id,
        student_id: student_id.to_string(),
        level: 1,
        rarity: 1,
        bond_level: 1,
        ex_skill_level: 1,
        normal_skill_level: 1,
        passive_skill_level: 1,
        sub_skill_level: 1,
        equipment1_tier: 0,
        equipment2_tier: 0,
        equipment3_tier: 0,
        unique_weapon_rank: 0,
        unique_weapon_level: 0,
        shards_owned: 0,
        shards_used: 0,
        favorite_gifts: 0,
        memo: String::new(),
        created_at: now,
        updated_at: now,
    }
}

impl<'a> UserFixtures<'a> {
    /// Insert a user for the test identity provider with the given subject.
    pub async fn insert_user(&self, subject: &str) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                external_provider: ActiveValue::Set(TEST_PROVIDER.to_string()),
                external_subject: ActiveValue::Set(subject.to_string()),
                external_email: ActiveValue::Set(Some(TEST_EMAIL.to_string())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a team owned by `user_id`.
    pub async fn insert_team(
        &self,
        user_id: i32,
        mode: &str,
        name: &str,
    ) -> Result<entity::team::Model, TestError> {
        self.insert_team_updated_ago(user_id, mode, name, 0).await
    }

    /// Insert a team whose `updated_at` lies `minutes_ago` minutes in the past.
    pub async fn insert_team_updated_ago(
        &self,
        user_id: i32,
        mode: &str,
        name: &str,
        minutes_ago: i64,
    ) -> Result<entity::team::Model, TestError> {
        let updated_at = Utc::now().naive_utc() - Duration::minutes(minutes_ago);

        Ok(
            entity::prelude::Team::insert(entity::team::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                mode: ActiveValue::Set(mode.to_string()),
                memo: ActiveValue::Set(String::new()),
                created_at: ActiveValue::Set(updated_at),
                updated_at: ActiveValue::Set(updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_team_member(
        &self,
        team_id: i32,
        position_index: i32,
        student_id: &str,
        is_support: bool,
    ) -> Result<entity::team_member::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::TeamMember::insert(entity::team_member::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                position_index: ActiveValue::Set(position_index),
                student_id: ActiveValue::Set(student_id.to_string()),
                is_support: ActiveValue::Set(is_support),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_progress(
        &self,
        progress: entity::user_student_progress::Model,
    ) -> Result<entity::user_student_progress::Model, TestError> {
        Ok(entity::prelude::UserStudentProgress::insert(
            entity::user_student_progress::ActiveModel {
                user_id: ActiveValue::Set(progress.user_id),
                student_id: ActiveValue::Set(progress.student_id),
                level: ActiveValue::Set(progress.level),
                rarity: ActiveValue::Set(progress.rarity),
                bond_level: ActiveValue::Set(progress.bond_level),
                ex_skill_level: ActiveValue::Set(progress.ex_skill_level),
                normal_skill_level: ActiveValue::Set(progress.normal_skill_level),
                passive_skill_level: ActiveValue::Set(progress.passive_skill_level),
                sub_skill_level: ActiveValue::Set(progress.sub_skill_level),
                equipment1_tier: ActiveValue::Set(progress.equipment1_tier),
                equipment2_tier: ActiveValue::Set(progress.equipment2_tier),
                equipment3_tier: ActiveValue::Set(progress.equipment3_tier),
                unique_weapon_rank: ActiveValue::Set(progress.unique_weapon_rank),
                unique_weapon_level: ActiveValue::Set(progress.unique_weapon_level),
                shards_owned: ActiveValue::Set(progress.shards_owned),
                shards_used: ActiveValue::Set(progress.shards_used),
                favorite_gifts: ActiveValue::Set(progress.favorite_gifts),
                memo: ActiveValue::Set(progress.memo),
                created_at: ActiveValue::Set(progress.created_at),
                updated_at: ActiveValue::Set(progress.updated_at),
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
