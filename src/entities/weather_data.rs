use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[sea_orm(string_value = "sunny")]
    Sunny,
    #[sea_orm(string_value = "humid")]
    Humid,
    #[sea_orm(string_value = "rainy")]
    Rainy,
    #[sea_orm(string_value = "dry")]
    Dry,
    #[sea_orm(string_value = "windy")]
    Windy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Sunny,
        WeatherCondition::Humid,
        WeatherCondition::Rainy,
        WeatherCondition::Dry,
        WeatherCondition::Windy,
    ];
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Sunny => write!(f, "sunny"),
            WeatherCondition::Humid => write!(f, "humid"),
            WeatherCondition::Rainy => write!(f, "rainy"),
            WeatherCondition::Dry => write!(f, "dry"),
            WeatherCondition::Windy => write!(f, "windy"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "weather_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub city: String,
    pub temperature: f64,
    pub humidity: i32,
    pub weather_condition: WeatherCondition,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
