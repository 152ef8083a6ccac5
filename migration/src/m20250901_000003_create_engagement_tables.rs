use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_core_tables::Users;
use crate::pk_column;

#[derive(DeriveIden)]
enum SkinDiaryEntries {
    Table,
    Id,
    UserId,
    EntryDate,
    SkinCondition,
    ProductsUsed,
    SkinFeeling,
    Breakouts,
    Sensitivity,
    Notes,
    SleepHours,
    StressLevel,
    WaterIntake,
    CreatedAt,
}

/// Referral invitations.
/// - referral_code: unique, handed to the invited friend
/// - status: pending until the friend registers with the code
/// - reward_amount: minor units credited to the referrer once completed
#[derive(DeriveIden)]
enum Referrals {
    Table,
    Id,
    ReferrerId,
    FriendEmail,
    ReferralCode,
    Status,
    RewardAmount,
    CreatedAt,
    CompletedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SkinDiaryEntries::Table)
                    .if_not_exists()
                    .col(&mut pk_column(manager, SkinDiaryEntries::Id))
                    .col(
                        ColumnDef::new(SkinDiaryEntries::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SkinDiaryEntries::EntryDate).date().not_null())
                    .col(
                        ColumnDef::new(SkinDiaryEntries::SkinCondition)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SkinDiaryEntries::ProductsUsed).json().not_null())
                    .col(
                        ColumnDef::new(SkinDiaryEntries::SkinFeeling)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SkinDiaryEntries::Breakouts)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SkinDiaryEntries::Sensitivity)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SkinDiaryEntries::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(SkinDiaryEntries::SleepHours).double().null())
                    .col(ColumnDef::new(SkinDiaryEntries::StressLevel).integer().null())
                    .col(ColumnDef::new(SkinDiaryEntries::WaterIntake).double().null())
                    .col(
                        ColumnDef::new(SkinDiaryEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skin_diary_entries_user")
                            .from(SkinDiaryEntries::Table, SkinDiaryEntries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_skin_diary_entries_user_date")
                    .table(SkinDiaryEntries::Table)
                    .col(SkinDiaryEntries::UserId)
                    .col(SkinDiaryEntries::EntryDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Referrals::Table)
                    .if_not_exists()
                    .col(&mut pk_column(manager, Referrals::Id))
                    .col(ColumnDef::new(Referrals::ReferrerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Referrals::FriendEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Referrals::ReferralCode)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Referrals::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Referrals::RewardAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Referrals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Referrals::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_referrals_referrer")
                            .from(Referrals::Table, Referrals::ReferrerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_referrals_code_unique")
                    .table(Referrals::Table)
                    .col(Referrals::ReferralCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Referrals::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(SkinDiaryEntries::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
