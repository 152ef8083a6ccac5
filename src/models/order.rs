use crate::entities::orders::{DeliverySlot, OrderStatus};
use crate::entities::{order_entity, order_item_entity};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PlanResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    pub subscription_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscribeResponse {
    pub message: String,
    pub subscription: PlanResponse,
    pub orders_created: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    /// Paise per unit
    pub price: i64,
}

impl From<order_item_entity::Model> for OrderItemResponse {
    fn from(i: order_item_entity::Model) -> Self {
        Self {
            id: i.id,
            product_id: i.product_id,
            quantity: i.quantity,
            price: i.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub order_number: String,
    pub delivery_date: NaiveDate,
    pub delivery_time: DeliverySlot,
    pub status: OrderStatus,
    /// Paise
    pub total_amount: i64,
    pub delivery_address: String,
    pub special_instructions: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    pub fn with_items(o: order_entity::Model, items: Vec<order_item_entity::Model>) -> Self {
        Self {
            id: o.id,
            order_number: o.order_number,
            delivery_date: o.delivery_date,
            delivery_time: o.delivery_time,
            status: o.status,
            total_amount: o.total_amount,
            delivery_address: o.delivery_address,
            special_instructions: o.special_instructions,
            created_at: o.created_at,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TodayOrdersResponse {
    pub orders: Vec<OrderResponse>,
}
