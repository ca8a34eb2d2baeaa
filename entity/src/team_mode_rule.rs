use sea_orm::entity::prelude::*;

/// Slot capacity for a team mode.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team_mode_rules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mode: String,
    pub slot_count: i32,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
