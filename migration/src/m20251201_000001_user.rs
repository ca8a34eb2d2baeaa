use sea_orm_migration::{prelude::*, schema::*};

static IDX_USERS_PROVIDER_SUBJECT: &str = "idx-users-external_provider-external_subject";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(text(Users::ExternalProvider))
                    .col(text(Users::ExternalSubject))
                    .col(text_null(Users::ExternalEmail))
                    .col(timestamp(Users::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Users::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USERS_PROVIDER_SUBJECT)
                    .table(Users::Table)
                    .col(Users::ExternalProvider)
                    .col(Users::ExternalSubject)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USERS_PROVIDER_SUBJECT)
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    ExternalProvider,
    ExternalSubject,
    ExternalEmail,
    CreatedAt,
    UpdatedAt,
}
