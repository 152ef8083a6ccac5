use crate::entities::{DeliverySlots, TagList, delivery_zone_entity};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeliveryZoneResponse {
    pub id: i64,
    pub city: String,
    pub zone_name: String,
    pub pincodes: TagList,
    pub delivery_slots: DeliverySlots,
    pub preparation_time_hours: i32,
}

impl From<delivery_zone_entity::Model> for DeliveryZoneResponse {
    fn from(z: delivery_zone_entity::Model) -> Self {
        Self {
            id: z.id,
            city: z.city,
            zone_name: z.zone_name,
            pincodes: z.pincodes,
            delivery_slots: z.delivery_slots,
            preparation_time_hours: z.preparation_time_hours,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeliveryZoneListResponse {
    pub delivery_zones: Vec<DeliveryZoneResponse>,
    pub coverage_message: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityRequest {
    #[schema(example = "400001")]
    pub pincode: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<DeliveryZoneResponse>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waitlist_option: Option<bool>,
}
