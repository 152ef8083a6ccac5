use super::{DeliverySlots, TagList};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "delivery_zones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub city: String,
    pub zone_name: String,
    #[sea_orm(column_type = "Json")]
    pub pincodes: TagList,
    #[sea_orm(column_type = "Json")]
    pub delivery_slots: DeliverySlots,
    pub preparation_time_hours: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
