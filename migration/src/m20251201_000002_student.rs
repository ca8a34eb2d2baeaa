use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(text(Students::StudentId).primary_key())
                    .col(text(Students::Name))
                    .col(text(Students::School))
                    .col(text(Students::Role))
                    .col(text(Students::Position))
                    .col(text(Students::AttackType))
                    .col(text(Students::DefenseType))
                    .col(integer(Students::RarityBase))
                    .col(boolean(Students::IsLimited).default(false))
                    .col(timestamp(Students::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Students::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    StudentId,
    Name,
    School,
    Role,
    Position,
    AttackType,
    DefenseType,
    RarityBase,
    IsLimited,
    CreatedAt,
    UpdatedAt,
}
