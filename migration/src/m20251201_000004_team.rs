use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_user::Users;

static IDX_TEAMS_USER_ID_UPDATED_AT: &str = "idx-teams-user_id-updated_at";
static FK_TEAMS_USER_ID: &str = "fk-teams-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(pk_auto(Teams::Id))
                    .col(integer(Teams::UserId))
                    .col(text(Teams::Name))
                    .col(text(Teams::Mode))
                    .col(text(Teams::Memo).default(""))
                    .col(timestamp(Teams::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Teams::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAMS_USER_ID_UPDATED_AT)
                    .table(Teams::Table)
                    .col(Teams::UserId)
                    .col(Teams::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAMS_USER_ID)
                    .from_tbl(Teams::Table)
                    .from_col(Teams::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAMS_USER_ID)
                    .table(Teams::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAMS_USER_ID_UPDATED_AT)
                    .table(Teams::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Teams {
    Table,
    Id,
    UserId,
    Name,
    Mode,
    Memo,
    CreatedAt,
    UpdatedAt,
}
