use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::progress::ProgressDetailDto;

pub struct ProgressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProgressRepository<'a, C> {
    /// Creates a new instance of [`ProgressRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        user_id: i32,
        student_id: &str,
    ) -> Result<Option<entity::user_student_progress::Model>, DbErr> {
        entity::prelude::UserStudentProgress::find_by_id((user_id, student_id.to_string()))
            .one(self.db)
            .await
    }

    /// Lists the user's progress rows for the given students
    ///
    /// Students without recorded progress have no entry in the result.
    pub async fn list_by_user_and_student_ids(
        &self,
        user_id: i32,
        student_ids: &[String],
    ) -> Result<Vec<entity::user_student_progress::Model>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::UserStudentProgress::find()
            .filter(entity::user_student_progress::Column::UserId.eq(user_id))
            .filter(entity::user_student_progress::Column::StudentId.is_in(student_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Inserts or overwrites the progress for a user and student in a single statement
    ///
    /// An existing row keeps its `created_at`; every progress field and `updated_at` are
    /// replaced.
    pub async fn save(
        &self,
        user_id: i32,
        student_id: &str,
        progress: &ProgressDetailDto,
    ) -> Result<entity::user_student_progress::Model, DbErr> {
        use entity::user_student_progress::Column;

        let now = Utc::now().naive_utc();
        let progress = entity::user_student_progress::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            student_id: ActiveValue::Set(student_id.to_string()),
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
            memo: ActiveValue::Set(progress.memo.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::UserStudentProgress::insert(progress)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::StudentId])
                    .update_columns([
                        Column::Level,
                        Column::Rarity,
                        Column::BondLevel,
                        Column::ExSkillLevel,
                        Column::NormalSkillLevel,
                        Column::PassiveSkillLevel,
                        Column::SubSkillLevel,
                        Column::Equipment1Tier,
                        Column::Equipment2Tier,
                        Column::Equipment3Tier,
                        Column::UniqueWeaponRank,
                        Column::UniqueWeaponLevel,
                        Column::ShardsOwned,
                        Column::ShardsUsed,
                        Column::FavoriteGifts,
                        Column::Memo,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
