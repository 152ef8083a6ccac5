use crate::entities::customization_preferences::{DeliveryTimePreference, Frequency, Packaging};
use crate::entities::preference_entity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every field is optional; absent fields take their defaults.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PreferenceRequest {
    pub delivery_time_preference: Option<DeliveryTimePreference>,
    pub frequency: Option<Frequency>,
    pub packaging_preference: Option<Packaging>,
    pub special_dietary_restrictions: Option<String>,
    pub weather_adaptation: Option<bool>,
    pub stress_level_consideration: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceResponse {
    pub delivery_time_preference: DeliveryTimePreference,
    pub frequency: Frequency,
    pub packaging_preference: Packaging,
    pub special_dietary_restrictions: String,
    pub weather_adaptation: bool,
    pub stress_level_consideration: bool,
}

impl Default for PreferenceResponse {
    fn default() -> Self {
        Self {
            delivery_time_preference: DeliveryTimePreference::default(),
            frequency: Frequency::default(),
            packaging_preference: Packaging::default(),
            special_dietary_restrictions: String::new(),
            weather_adaptation: true,
            stress_level_consideration: false,
        }
    }
}

impl From<preference_entity::Model> for PreferenceResponse {
    fn from(p: preference_entity::Model) -> Self {
        Self {
            delivery_time_preference: p.delivery_time_preference,
            frequency: p.frequency,
            packaging_preference: p.packaging_preference,
            special_dietary_restrictions: p.special_dietary_restrictions,
            weather_adaptation: p.weather_adaptation,
            stress_level_consideration: p.stress_level_consideration,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PreferenceEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub preferences: PreferenceResponse,
}
