pub use sea_orm_migration::prelude::*;

mod m20251201_000001_user;
mod m20251201_000002_student;
mod m20251201_000003_user_student_progress;
mod m20251201_000004_team;
mod m20251201_000005_team_member;
mod m20251201_000006_team_mode_rule;
mod m20251201_000007_progress_cap;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_user::Migration),
            Box::new(m20251201_000002_student::Migration),
            Box::new(m20251201_000003_user_student_progress::Migration),
            Box::new(m20251201_000004_team::Migration),
            Box::new(m20251201_000005_team_member::Migration),
            Box::new(m20251201_000006_team_mode_rule::Migration),
            Box::new(m20251201_000007_progress_cap::Migration),
        ]
    }
}
