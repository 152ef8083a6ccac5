use sea_orm_migration::prelude::*;

use crate::m20250901_000001_create_core_tables::{Orders, Products, Users};
use crate::pk_column;

/// Weather readings taken when serving weather-adapted selections
#[derive(DeriveIden)]
enum WeatherData {
    Table,
    Id,
    City,
    Temperature,
    Humidity,
    WeatherCondition,
    RecordedAt,
}

#[derive(DeriveIden)]
enum CustomizationPreferences {
    Table,
    Id,
    UserId,
    DeliveryTimePreference,
    Frequency,
    PackagingPreference,
    SpecialDietaryRestrictions,
    WeatherAdaptation,
    StressLevelConsideration,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum DeliveryZones {
    Table,
    Id,
    City,
    ZoneName,
    Pincodes,
    DeliverySlots,
    PreparationTimeHours,
    IsActive,
}

#[derive(DeriveIden)]
enum ProductBatches {
    Table,
    Id,
    ProductId,
    BatchNumber,
    PreparationDate,
    ExpiryDatetime,
    QuantityPrepared,
    PreparationLocation,
    QualityScore,
    IngredientsSource,
}

#[derive(DeriveIden)]
enum UserFeedback {
    Table,
    Id,
    UserId,
    OrderId,
    ProductId,
    Rating,
    SkinReaction,
    Effectiveness,
    TexturePreference,
    FragrancePreference,
    Comments,
    WouldReorder,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeatherData::Table)
                    .if_not_exists()
                    .col(&mut pk_column(manager, WeatherData::Id))
                    .col(ColumnDef::new(WeatherData::City).string_len(100).not_null())
                    .col(ColumnDef::new(WeatherData::Temperature).double().not_null())
                    .col(ColumnDef::new(WeatherData::Humidity).integer().not_null())
                    .col(
                        ColumnDef::new(WeatherData::WeatherCondition)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeatherData::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomizationPreferences::Table)
                    .if_not_exists()
                    .col(&mut pk_column(manager, CustomizationPreferences::Id))
                    .col(
                        ColumnDef::new(CustomizationPreferences::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomizationPreferences::DeliveryTimePreference)
                            .string_len(20)
                            .not_null()
                            .default("morning"),
                    )
                    .col(
                        ColumnDef::new(CustomizationPreferences::Frequency)
                            .string_len(20)
                            .not_null()
                            .default("daily"),
                    )
                    .col(
                        ColumnDef::new(CustomizationPreferences::PackagingPreference)
                            .string_len(32)
                            .not_null()
                            .default("glass"),
                    )
                    .col(
                        ColumnDef::new(CustomizationPreferences::SpecialDietaryRestrictions)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CustomizationPreferences::WeatherAdaptation)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(CustomizationPreferences::StressLevelConsideration)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CustomizationPreferences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CustomizationPreferences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customization_preferences_user")
                            .from(
                                CustomizationPreferences::Table,
                                CustomizationPreferences::UserId,
                            )
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
                    .name("idx_customization_preferences_user_unique")
                    .table(CustomizationPreferences::Table)
                    .col(CustomizationPreferences::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DeliveryZones::Table)
                    .if_not_exists()
                    .col(&mut pk_column(manager, DeliveryZones::Id))
                    .col(ColumnDef::new(DeliveryZones::City).string_len(100).not_null())
                    .col(
                        ColumnDef::new(DeliveryZones::ZoneName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeliveryZones::Pincodes).json().not_null())
                    .col(ColumnDef::new(DeliveryZones::DeliverySlots).json().not_null())
                    .col(
                        ColumnDef::new(DeliveryZones::PreparationTimeHours)
                            .integer()
                            .not_null()
                            .default(2),
                    )
                    .col(
                        ColumnDef::new(DeliveryZones::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductBatches::Table)
                    .if_not_exists()
                    .col(&mut pk_column(manager, ProductBatches::Id))
                    .col(
                        ColumnDef::new(ProductBatches::ProductId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductBatches::BatchNumber)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ProductBatches::PreparationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductBatches::ExpiryDatetime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductBatches::QuantityPrepared)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductBatches::PreparationLocation)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductBatches::QualityScore)
                            .double()
                            .not_null()
                            .default(5.0),
                    )
                    .col(ColumnDef::new(ProductBatches::IngredientsSource).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_batches_product")
                            .from(ProductBatches::Table, ProductBatches::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_product_batches_preparation_date")
                    .table(ProductBatches::Table)
                    .col(ProductBatches::PreparationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserFeedback::Table)
                    .if_not_exists()
                    .col(&mut pk_column(manager, UserFeedback::Id))
                    .col(ColumnDef::new(UserFeedback::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserFeedback::OrderId).big_integer().not_null())
                    .col(ColumnDef::new(UserFeedback::ProductId).big_integer().not_null())
                    .col(ColumnDef::new(UserFeedback::Rating).integer().not_null())
                    .col(ColumnDef::new(UserFeedback::SkinReaction).string_len(32).null())
                    .col(ColumnDef::new(UserFeedback::Effectiveness).integer().null())
                    .col(
                        ColumnDef::new(UserFeedback::TexturePreference)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserFeedback::FragrancePreference)
                            .string_len(50)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserFeedback::Comments)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(UserFeedback::WouldReorder)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(UserFeedback::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_feedback_user")
                            .from(UserFeedback::Table, UserFeedback::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_feedback_order")
                            .from(UserFeedback::Table, UserFeedback::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_feedback_product")
                            .from(UserFeedback::Table, UserFeedback::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFeedback::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductBatches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DeliveryZones::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CustomizationPreferences::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(WeatherData::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
