use crate::entities::diary_entity;
use crate::entities::skin_diary_entries::SkinCondition;
use crate::entities::user_feedback::SkinReaction;
use crate::entities::TagList;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Feedback

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    pub order_id: i64,
    pub product_id: i64,
    /// 1..=5
    pub rating: i32,
    pub skin_reaction: Option<SkinReaction>,
    /// 1..=5
    pub effectiveness: Option<i32>,
    pub texture_preference: Option<String>,
    pub fragrance_preference: Option<String>,
    pub comments: Option<String>,
    pub would_reorder: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub message: String,
    pub points_earned: i32,
    pub feedback_id: i64,
}

// Skin diary

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiaryEntryRequest {
    pub skin_condition: SkinCondition,
    /// Defaults to today (UTC)
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub products_used: Vec<String>,
    pub skin_feeling: Option<String>,
    #[serde(default)]
    pub breakouts: bool,
    #[serde(default)]
    pub sensitivity: bool,
    pub notes: Option<String>,
    pub sleep_hours: Option<f64>,
    /// 0..=10
    pub stress_level: Option<i32>,
    /// Litres
    pub water_intake: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiaryEntryResponse {
    pub id: i64,
    pub entry_date: NaiveDate,
    pub skin_condition: SkinCondition,
    pub products_used: TagList,
    pub skin_feeling: Option<String>,
    pub breakouts: bool,
    pub sensitivity: bool,
    pub notes: String,
    pub sleep_hours: Option<f64>,
    pub stress_level: Option<i32>,
    pub water_intake: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<diary_entity::Model> for DiaryEntryResponse {
    fn from(e: diary_entity::Model) -> Self {
        Self {
            id: e.id,
            entry_date: e.entry_date,
            skin_condition: e.skin_condition,
            products_used: e.products_used,
            skin_feeling: e.skin_feeling,
            breakouts: e.breakouts,
            sensitivity: e.sensitivity,
            notes: e.notes,
            sleep_hours: e.sleep_hours,
            stress_level: e.stress_level,
            water_intake: e.water_intake,
            created_at: e.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementTrend {
    Positive,
    Stable,
    Negative,
    InsufficientData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProgressSummary {
    pub total_entries: usize,
    pub consistent_days: usize,
    pub improvement_trend: ImprovementTrend,
    pub best_performing_products: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiaryListResponse {
    pub diary_entries: Vec<DiaryEntryResponse>,
    pub progress_summary: ProgressSummary,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiaryCreatedResponse {
    pub message: String,
    pub entry_id: i64,
    pub insights: Vec<String>,
}

// Referrals

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ReferralRequest {
    #[schema(example = "friend@example.com")]
    pub friend_email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferralCreatedResponse {
    pub message: String,
    pub referral_code: String,
    pub reward: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReferralReward {
    pub friend_email: String,
    /// Paise
    pub reward: i64,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferralStats {
    pub total_referrals: u64,
    pub successful_referrals: u64,
    pub pending_referrals: u64,
    /// Paise
    pub total_rewards_earned: i64,
    pub current_referral_code: String,
    pub referral_rewards: Vec<ReferralReward>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgramDetails {
    pub friend_discount: String,
    pub your_reward: String,
    pub additional_benefits: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferralDashboardResponse {
    pub referral_stats: ReferralStats,
    pub program_details: ProgramDetails,
}

// Sustainability

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SustainabilityMetrics {
    pub plastic_saved_grams: u64,
    pub chemical_preservatives_avoided: u64,
    pub local_sourcing_percentage: u32,
    /// kg CO2
    pub carbon_footprint_reduction: f64,
    pub biodegradable_packaging_used: u64,
    pub water_conservation_liters: f64,
    pub supporting_local_farmers: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SustainabilityResponse {
    pub sustainability_impact: SustainabilityMetrics,
    pub eco_badge_level: String,
    pub next_milestone: String,
}
