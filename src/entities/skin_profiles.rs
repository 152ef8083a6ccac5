use super::TagList;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "skin_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub skin_type: String,
    #[sea_orm(column_type = "Json")]
    pub skin_concerns: TagList,
    #[sea_orm(column_type = "Json")]
    pub allergies: TagList,
    #[sea_orm(column_type = "Json")]
    pub preferred_ingredients: TagList,
    pub skin_tone: Option<String>,
    pub routine_frequency: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
