use sea_orm::entity::prelude::*;

/// Catalog entry for a playable student.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub name: String,
    pub school: String,
    pub role: String,
    pub position: String,
    pub attack_type: String,
    pub defense_type: String,
    pub rarity_base: i32,
    pub is_limited: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_student_progress::Entity")]
    UserStudentProgress,
    #[sea_orm(has_many = "super::team_member::Entity")]
    TeamMember,
}

impl Related<super::user_student_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStudentProgress.def()
    }
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
