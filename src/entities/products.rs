use super::TagList;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    ToSchema,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    #[sea_orm(string_value = "cleanser")]
    Cleanser,
    #[sea_orm(string_value = "toner")]
    Toner,
    #[sea_orm(string_value = "moisturizer")]
    Moisturizer,
    #[sea_orm(string_value = "serum")]
    Serum,
    #[sea_orm(string_value = "night_cream")]
    NightCream,
    #[sea_orm(string_value = "oil")]
    Oil,
    #[sea_orm(string_value = "mask")]
    Mask,
    #[sea_orm(string_value = "scrub")]
    Scrub,
    #[sea_orm(string_value = "treatment")]
    Treatment,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProductCategory::Cleanser => "cleanser",
            ProductCategory::Toner => "toner",
            ProductCategory::Moisturizer => "moisturizer",
            ProductCategory::Serum => "serum",
            ProductCategory::NightCream => "night_cream",
            ProductCategory::Oil => "oil",
            ProductCategory::Mask => "mask",
            ProductCategory::Scrub => "scrub",
            ProductCategory::Treatment => "treatment",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub category: ProductCategory,
    #[sea_orm(column_type = "Json")]
    pub ingredients: TagList,
    #[sea_orm(column_type = "Json")]
    pub skin_types: TagList,
    #[sea_orm(column_type = "Json")]
    pub benefits: TagList,
    #[sea_orm(column_type = "Text")]
    pub usage_instructions: String,
    pub shelf_life_hours: i32,
    pub price: i64, // paise
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_batches::Entity")]
    Batches,
}

impl Related<super::product_batches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
