use chrono::{DateTime, NaiveDate, Utc};
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
    PartialOrd,
    Ord,
    ToSchema,
    DeriveActiveEnum,
    EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum DeliverySlot {
    #[sea_orm(string_value = "morning")]
    Morning,
    #[sea_orm(string_value = "evening")]
    Evening,
    #[sea_orm(string_value = "weekly_treatment")]
    WeeklyTreatment,
}

impl DeliverySlot {
    pub const DAILY: [DeliverySlot; 3] = [
        DeliverySlot::Morning,
        DeliverySlot::Evening,
        DeliverySlot::WeeklyTreatment,
    ];
}

impl std::fmt::Display for DeliverySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliverySlot::Morning => write!(f, "morning"),
            DeliverySlot::Evening => write!(f, "evening"),
            DeliverySlot::WeeklyTreatment => write!(f, "weekly_treatment"),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[sea_orm(string_value = "preparing")]
    Preparing,
    #[sea_orm(string_value = "dispatched")]
    Dispatched,
    #[sea_orm(string_value = "delivered")]
    Delivered,
}

impl OrderStatus {
    /// Forward-only, one step at a time.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Preparing, OrderStatus::Dispatched)
                | (OrderStatus::Dispatched, OrderStatus::Delivered)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Preparing => write!(f, "preparing"),
            OrderStatus::Dispatched => write!(f, "dispatched"),
            OrderStatus::Delivered => write!(f, "delivered"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    #[sea_orm(unique)]
    pub order_number: String,
    pub delivery_date: NaiveDate,
    pub delivery_time: DeliverySlot,
    pub status: OrderStatus,
    pub total_amount: i64, // paise
    #[sea_orm(column_type = "Text")]
    pub delivery_address: String,
    #[sea_orm(column_type = "Text")]
    pub special_instructions: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_items::Entity")]
    Items,
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_moves_forward_only() {
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Dispatched));
        assert!(OrderStatus::Dispatched.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Preparing.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Dispatched.can_transition_to(OrderStatus::Dispatched));
    }

    #[test]
    fn test_enums_store_as_bounded_strings() {
        assert_eq!(
            DeliverySlot::db_type().get_column_type(),
            &ColumnType::String(Some(32))
        );
        assert_eq!(DeliverySlot::WeeklyTreatment.to_value(), "weekly_treatment");
        assert_eq!(
            OrderStatus::try_from_value(&"dispatched".to_string()).unwrap(),
            OrderStatus::Dispatched
        );
    }
}
