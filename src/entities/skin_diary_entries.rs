use super::TagList;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum SkinCondition {
    #[sea_orm(string_value = "excellent")]
    Excellent,
    #[sea_orm(string_value = "good")]
    Good,
    #[sea_orm(string_value = "average")]
    Average,
    #[sea_orm(string_value = "poor")]
    Poor,
}

impl SkinCondition {
    pub fn score(self) -> i32 {
        match self {
            SkinCondition::Excellent => 4,
            SkinCondition::Good => 3,
            SkinCondition::Average => 2,
            SkinCondition::Poor => 1,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, SkinCondition::Excellent | SkinCondition::Good)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skin_diary_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub entry_date: NaiveDate,
    pub skin_condition: SkinCondition,
    #[sea_orm(column_type = "Json")]
    pub products_used: TagList,
    pub skin_feeling: Option<String>,
    pub breakouts: bool,
    pub sensitivity: bool,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub sleep_hours: Option<f64>,
    pub stress_level: Option<i32>,
    pub water_intake: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
