use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_batches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_id: i64,
    #[sea_orm(unique)]
    pub batch_number: String,
    pub preparation_date: DateTime<Utc>,
    pub expiry_datetime: DateTime<Utc>,
    pub quantity_prepared: i32,
    pub preparation_location: String,
    pub quality_score: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub ingredients_source: Option<String>,
}

impl Model {
    /// Whole hours until expiry, 0 once expired.
    pub fn freshness_hours_left(&self, now: DateTime<Utc>) -> i64 {
        (self.expiry_datetime - now).num_hours().max(0)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Product,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
