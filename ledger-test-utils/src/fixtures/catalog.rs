use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { context: self }
    }
}

pub struct CatalogFixtures<'a> {
    context: &'a TestContext,
}

/// Create a mock student model for testing.
///
/// Returns an in-memory model with standard catalog values; only the id and name vary.
pub fn mock_student(student_id: &str, name: &str) -> entity::student::Model {
    let now = Utc::now().naive_utc();
    entity::student::Model {
        student_id: student_id.to_string(),
        name: name.to_string(),
        school: "Millennium".to_string(),
        role: "Dealer".to_string(),
        position: "Back".to_string(),
        attack_type: "Mystic".to_string(),
        defense_type: "Light".to_string(),
        rarity_base: 3,
        is_limited: false,
        created_at: now,
        updated_at: now,
    }
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_student(
        &self,
        student_id: &str,
        name: &str,
    ) -> Result<entity::student::Model, TestError> {
        self.insert_student_model(mock_student(student_id, name))
            .await
    }

    pub async fn insert_student_model(
        &self,
        student: entity::student::Model,
    ) -> Result<entity::student::Model, TestError> {
        Ok(
            entity::prelude::Student::insert(entity::student::ActiveModel {
                student_id: ActiveValue::Set(student.student_id),
                name: ActiveValue::Set(student.name),
                school: ActiveValue::Set(student.school),
                role: ActiveValue::Set(student.role),
                position: ActiveValue::Set(student.position),
                attack_type: ActiveValue::Set(student.attack_type),
                defense_type: ActiveValue::Set(student.defense_type),
                rarity_base: ActiveValue::Set(student.rarity_base),
                is_limited: ActiveValue::Set(student.is_limited),
                created_at: ActiveValue::Set(student.created_at),
                updated_at: ActiveValue::Set(student.updated_at),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_progress_cap(
        &self,
        key: &str,
        min_value: i32,
        max_value: i32,
    ) -> Result<entity::progress_cap::Model, TestError> {
        Ok(
            entity::prelude::ProgressCap::insert(entity::progress_cap::ActiveModel {
                key: ActiveValue::Set(key.to_string()),
                min_value: ActiveValue::Set(min_value),
                max_value: ActiveValue::Set(max_value),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_mode_rule(
        &self,
        mode: &str,
        slot_count: i32,
    ) -> Result<entity::team_mode_rule::Model, TestError> {
        Ok(
            entity::prelude::TeamModeRule::insert(entity::team_mode_rule::ActiveModel {
                mode: ActiveValue::Set(mode.to_string()),
                slot_count: ActiveValue::Set(slot_count),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
