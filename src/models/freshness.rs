use crate::entities::customization_preferences::DeliveryTimePreference;
use crate::entities::{TagList, product_batch_entity};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::{ProductResponse, WeatherReading};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FreshBatchResponse {
    pub id: i64,
    pub product_id: i64,
    pub product_name: Option<String>,
    pub batch_number: String,
    pub preparation_date: DateTime<Utc>,
    pub expiry_datetime: DateTime<Utc>,
    pub quantity_prepared: i32,
    pub preparation_location: String,
    pub quality_score: f64,
    pub ingredients_source: Option<String>,
    pub freshness_hours_left: i64,
}

impl FreshBatchResponse {
    pub fn new(
        b: product_batch_entity::Model,
        product_name: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let freshness_hours_left = b.freshness_hours_left(now);
        Self {
            id: b.id,
            product_id: b.product_id,
            product_name,
            batch_number: b.batch_number,
            preparation_date: b.preparation_date,
            expiry_datetime: b.expiry_datetime,
            quantity_prepared: b.quantity_prepared,
            preparation_location: b.preparation_location,
            quality_score: b.quality_score,
            ingredients_source: b.ingredients_source,
            freshness_hours_left,
        }
    }
}

/// Kitchen-side record of a freshly prepared batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewBatch {
    pub product_id: i64,
    pub prepared_at: DateTime<Utc>,
    pub quantity_prepared: i32,
    pub preparation_location: String,
    pub quality_score: Option<f64>,
    pub ingredients_source: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FreshBatchesResponse {
    pub fresh_batches: Vec<FreshBatchResponse>,
    pub total_fresh_products: usize,
    pub freshness_guarantee: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QualityAssurance {
    pub all_products_tested: bool,
    pub organic_certification: bool,
    pub preparation_time: String,
    pub temperature_controlled: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FreshnessReport {
    pub date: NaiveDate,
    pub total_fresh_products: usize,
    pub preparation_locations: Vec<String>,
    pub average_freshness_hours: f64,
    pub weather_adapted_selection: Vec<ProductResponse>,
    pub current_weather: WeatherReading,
    pub quality_assurance: QualityAssurance,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PreparationSchedule {
    /// `YYYY-MM-DD HH:MM`, UTC
    pub next_preparation: String,
    /// `HH:MM`, UTC
    pub cut_off_time: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DailyFreshReportResponse {
    pub freshness_report: FreshnessReport,
    pub personalized_message: String,
    pub next_preparation_time: PreparationSchedule,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutineStep {
    pub step: u32,
    pub product: String,
    pub time: String,
    pub instruction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutineSession {
    pub steps: Vec<RoutineStep>,
    pub total_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeeklyTreatment {
    pub frequency: String,
    pub product: String,
    pub day: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonalizedRoutine {
    pub morning: RoutineSession,
    pub evening: RoutineSession,
    pub weekly_treatments: Vec<WeeklyTreatment>,
    pub skin_concerns_focus: TagList,
    pub expected_results_timeline: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_preference: Option<DeliveryTimePreference>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PersonalizedRoutineResponse {
    pub personalized_routine: PersonalizedRoutine,
    pub routine_duration: String,
    pub next_review_date: NaiveDate,
}
