use sea_orm_migration::{prelude::*, schema::*};

/// Initial bounds for each progress cap key as `(key, min, max)`.
///
/// Equipment slots share `equipmentTier` and owned/used shard counts share `shards`.
const DEFAULT_PROGRESS_CAPS: [(&str, i32, i32); 12] = [
    ("level", 1, 90),
    ("rarity", 1, 8),
    ("bondLevel", 1, 100),
    ("exSkillLevel", 1, 5),
    ("normalSkillLevel", 1, 10),
    ("passiveSkillLevel", 1, 10),
    ("subSkillLevel", 1, 10),
    ("equipmentTier", 0, 10),
    ("uniqueWeaponRank", 0, 4),
    ("uniqueWeaponLevel", 0, 60),
    ("shards", 0, 9999),
    ("favoriteGifts", 0, 999),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressCaps::Table)
                    .if_not_exists()
                    .col(text(ProgressCaps::Key).primary_key())
                    .col(integer(ProgressCaps::MinValue))
                    .col(integer(ProgressCaps::MaxValue))
                    .col(timestamp(ProgressCaps::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert.into_table(ProgressCaps::Table).columns([
            ProgressCaps::Key,
            ProgressCaps::MinValue,
            ProgressCaps::MaxValue,
        ]);
        for (key, min_value, max_value) in DEFAULT_PROGRESS_CAPS {
            insert.values_panic([key.into(), min_value.into(), max_value.into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressCaps::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProgressCaps {
    Table,
    Key,
    MinValue,
    MaxValue,
    UpdatedAt,
}
