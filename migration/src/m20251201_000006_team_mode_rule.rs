use sea_orm_migration::{prelude::*, schema::*};

/// Slot capacity per team mode: total assault (`raid`) and joint firing drill (`jfd`).
const DEFAULT_MODE_RULES: [(&str, i32); 2] = [("raid", 6), ("jfd", 6)];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamModeRules::Table)
                    .if_not_exists()
                    .col(text(TeamModeRules::Mode).primary_key())
                    .col(integer(TeamModeRules::SlotCount))
                    .col(timestamp(TeamModeRules::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(TeamModeRules::Table)
            .columns([TeamModeRules::Mode, TeamModeRules::SlotCount]);
        for (mode, slot_count) in DEFAULT_MODE_RULES {
            insert.values_panic([mode.into(), slot_count.into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamModeRules::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeamModeRules {
    Table,
    Mode,
    SlotCount,
    UpdatedAt,
}
