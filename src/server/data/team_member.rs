use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionSession, TransactionTrait,
};

/// A member row to be written by [`TeamMemberRepository::replace_all`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTeamMember {
    pub student_id: String,
    pub position_index: i32,
    pub is_support: bool,
}

pub struct TeamMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamMemberRepository<'a, C> {
    /// Creates a new instance of [`TeamMemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists a team's members ordered by position
    pub async fn list(&self, team_id: i32) -> Result<Vec<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .order_by_asc(entity::team_member::Column::PositionIndex)
            .all(self.db)
            .await
    }

    /// Replaces every member of a team with `members`
    ///
    /// The delete and the insert run in one transaction, readers see either the previous
    /// member set or the new one.
    pub async fn replace_all(
        &self,
        team_id: i32,
        members: &[NewTeamMember],
    ) -> Result<(), DbErr>
    where
        C: TransactionTrait,
    {
        let txn = self.db.begin().await?;

        entity::prelude::TeamMember::delete_many()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .exec(&txn)
            .await?;

        if !members.is_empty() {
            let now = Utc::now().naive_utc();
            let rows = members.iter().map(|member| entity::team_member::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                position_index: ActiveValue::Set(member.position_index),
                student_id: ActiveValue::Set(member.student_id.clone()),
                is_support: ActiveValue::Set(member.is_support),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            });

            entity::prelude::TeamMember::insert_many(rows)
                .exec(&txn)
                .await?;
        }

        txn.commit().await
    }
}
