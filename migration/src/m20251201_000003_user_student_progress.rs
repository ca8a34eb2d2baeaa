use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251201_000001_user::Users, m20251201_000002_student::Students};

static FK_PROGRESS_USER_ID: &str = "fk-user_student_progress-user_id";
static FK_PROGRESS_STUDENT_ID: &str = "fk-user_student_progress-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStudentProgress::Table)
                    .if_not_exists()
                    .col(integer(UserStudentProgress::UserId))
                    .col(text(UserStudentProgress::StudentId))
                    .col(integer(UserStudentProgress::Level))
                    .col(integer(UserStudentProgress::Rarity))
                    .col(integer(UserStudentProgress::BondLevel))
                    .col(integer(UserStudentProgress::ExSkillLevel))
                    .col(integer(UserStudentProgress::NormalSkillLevel))
                    .col(integer(UserStudentProgress::PassiveSkillLevel))
                    .col(integer(UserStudentProgress::SubSkillLevel))
                    .col(integer(UserStudentProgress::Equipment1Tier))
                    .col(integer(UserStudentProgress::Equipment2Tier))
                    .col(integer(UserStudentProgress::Equipment3Tier))
                    .col(integer(UserStudentProgress::UniqueWeaponRank))
                    .col(integer(UserStudentProgress::UniqueWeaponLevel))
                    .col(integer(UserStudentProgress::ShardsOwned))
                    .col(integer(UserStudentProgress::ShardsUsed))
                    .col(integer(UserStudentProgress::FavoriteGifts))
                    .col(text(UserStudentProgress::Memo).default(""))
                    .col(
                        timestamp(UserStudentProgress::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(UserStudentProgress::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserStudentProgress::UserId)
                            .col(UserStudentProgress::StudentId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRESS_USER_ID)
                    .from_tbl(UserStudentProgress::Table)
                    .from_col(UserStudentProgress::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRESS_STUDENT_ID)
                    .from_tbl(UserStudentProgress::Table)
                    .from_col(UserStudentProgress::StudentId)
                    .to_tbl(Students::Table)
                    .to_col(Students::StudentId)
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
                    .name(FK_PROGRESS_STUDENT_ID)
                    .table(UserStudentProgress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROGRESS_USER_ID)
                    .table(UserStudentProgress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserStudentProgress::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserStudentProgress {
    Table,
    UserId,
    StudentId,
    Level,
    Rarity,
    BondLevel,
    ExSkillLevel,
    NormalSkillLevel,
    PassiveSkillLevel,
    SubSkillLevel,
    #[sea_orm(iden = "equipment1_tier")]
    Equipment1Tier,
    #[sea_orm(iden = "equipment2_tier")]
    Equipment2Tier,
    #[sea_orm(iden = "equipment3_tier")]
    Equipment3Tier,
    UniqueWeaponRank,
    UniqueWeaponLevel,
    ShardsOwned,
    ShardsUsed,
    FavoriteGifts,
    Memo,
    CreatedAt,
    UpdatedAt,
}
