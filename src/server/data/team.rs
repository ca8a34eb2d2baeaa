use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the user's teams with their member counts, most recently updated first
    ///
    /// # Arguments
    /// - `user_id`: Owner of the teams
    /// - `mode`: Only return teams of this mode when set
    ///
    /// # Returns
    /// A vector of `(team, member_count)` tuples
    pub async fn list(
        &self,
        user_id: i32,
        mode: Option<&str>,
    ) -> Result<Vec<(entity::team::Model, i64)>, DbErr> {
        let mut query =
            entity::prelude::Team::find().filter(entity::team::Column::UserId.eq(user_id));
        if let Some(mode) = mode {
            query = query.filter(entity::team::Column::Mode.eq(mode));
        }

        let teams = query
            .order_by_desc(entity::team::Column::UpdatedAt)
            .order_by_desc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        if teams.is_empty() {
            return Ok(Vec::new());
        }

        let team_ids: Vec<i32> = teams.iter().map(|team| team.id).collect();
        let member_counts: HashMap<i32, i64> = entity::prelude::TeamMember::find()
            .select_only()
            .column(entity::team_member::Column::TeamId)
            .column_as(
                SimpleExpr::from(Func::count(Expr::col(
                    entity::team_member::Column::PositionIndex,
                ))),
                "member_count",
            )
            .filter(entity::team_member::Column::TeamId.is_in(team_ids))
            .group_by(entity::team_member::Column::TeamId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(teams
            .into_iter()
            .map(|team| {
                let member_count = member_counts.get(&team.id).copied().unwrap_or(0);
                (team, member_count)
            })
            .collect())
    }

    /// Gets a team only when it is owned by `user_id`
    pub async fn get(
        &self,
        user_id: i32,
        team_id: i32,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id)
            .filter(entity::team::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
