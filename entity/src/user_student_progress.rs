use sea_orm::entity::prelude::*;

/// Upgrade progress of one student for one user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_student_progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub level: i32,
    pub rarity: i32,
    pub bond_level: i32,
    pub ex_skill_level: i32,
    pub normal_skill_level: i32,
    pub passive_skill_level: i32,
    pub sub_skill_level: i32,
    pub equipment1_tier: i32,
    pub equipment2_tier: i32,
    pub equipment3_tier: i32,
    pub unique_weapon_rank: i32,
    pub unique_weapon_level: i32,
    pub shards_owned: i32,
    pub shards_used: i32,
    pub favorite_gifts: i32,
    #[sea_orm(column_type = "Text")]
    pub memo: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
