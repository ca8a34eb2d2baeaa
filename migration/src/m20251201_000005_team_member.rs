use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251201_000002_student::Students, m20251201_000004_team::Teams};

static FK_TEAM_MEMBERS_TEAM_ID: &str = "fk-team_members-team_id";
static FK_TEAM_MEMBERS_STUDENT_ID: &str = "fk-team_members-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(integer(TeamMembers::TeamId))
                    .col(integer(TeamMembers::PositionIndex))
                    .col(text(TeamMembers::StudentId))
                    .col(boolean(TeamMembers::IsSupport).default(false))
                    .col(timestamp(TeamMembers::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(TeamMembers::UpdatedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .col(TeamMembers::TeamId)
                            .col(TeamMembers::PositionIndex),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_MEMBERS_TEAM_ID)
                    .from_tbl(TeamMembers::Table)
                    .from_col(TeamMembers::TeamId)
                    .to_tbl(Teams::Table)
                    .to_col(Teams::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Catalog rows referenced by a team cannot be removed out from under it
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_MEMBERS_STUDENT_ID)
                    .from_tbl(TeamMembers::Table)
                    .from_col(TeamMembers::StudentId)
                    .to_tbl(Students::Table)
                    .to_col(Students::StudentId)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_MEMBERS_STUDENT_ID)
                    .table(TeamMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_MEMBERS_TEAM_ID)
                    .table(TeamMembers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamMembers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeamMembers {
    Table,
    TeamId,
    PositionIndex,
    StudentId,
    IsSupport,
    CreatedAt,
    UpdatedAt,
}
