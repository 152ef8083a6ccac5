use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    ToSchema,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(20))")]
#[serde(rename_all = "snake_case")]
pub enum DeliveryTimePreference {
    #[default]
    #[sea_orm(string_value = "morning")]
    Morning,
    #[sea_orm(string_value = "evening")]
    Evening,
    #[sea_orm(string_value = "both")]
    Both,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    ToSchema,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(20))")]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "alternate")]
    Alternate,
    #[sea_orm(string_value = "weekly")]
    Weekly,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    ToSchema,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum Packaging {
    #[default]
    #[sea_orm(string_value = "glass")]
    Glass,
    #[sea_orm(string_value = "compostable")]
    Compostable,
    #[sea_orm(string_value = "bamboo")]
    Bamboo,
}

impl std::fmt::Display for DeliveryTimePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryTimePreference::Morning => write!(f, "morning"),
            DeliveryTimePreference::Evening => write!(f, "evening"),
            DeliveryTimePreference::Both => write!(f, "both"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "customization_preferences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub delivery_time_preference: DeliveryTimePreference,
    pub frequency: Frequency,
    pub packaging_preference: Packaging,
    pub special_dietary_restrictions: String,
    pub weather_adaptation: bool,
    pub stress_level_consideration: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
