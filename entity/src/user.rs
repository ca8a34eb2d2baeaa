use sea_orm::entity::prelude::*;

/// A ledger account, keyed externally by the identity provider and its subject.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub external_provider: String,
    pub external_subject: String,
    pub external_email: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
    #[sea_orm(has_many = "super::user_student_progress::Entity")]
    UserStudentProgress,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::user_student_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStudentProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
