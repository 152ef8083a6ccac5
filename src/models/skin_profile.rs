use crate::entities::subscription_plans::PlanType;
use crate::entities::{TagList, skin_profile_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ProductResponse;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SkinQuizRequest {
    #[schema(example = "dry")]
    pub skin_type: Option<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub preferred_ingredients: Vec<String>,
    pub skin_tone: Option<String>,
    pub routine_frequency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkinProfileResponse {
    pub id: i64,
    pub user_id: i64,
    pub skin_type: String,
    pub skin_concerns: TagList,
    pub allergies: TagList,
    pub preferred_ingredients: TagList,
    pub skin_tone: Option<String>,
    pub routine_frequency: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<skin_profile_entity::Model> for SkinProfileResponse {
    fn from(p: skin_profile_entity::Model) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            skin_type: p.skin_type,
            skin_concerns: p.skin_concerns,
            allergies: p.allergies,
            preferred_ingredients: p.preferred_ingredients,
            skin_tone: p.skin_tone,
            routine_frequency: p.routine_frequency,
            updated_at: p.updated_at,
        }
    }
}

/// Routine buckets of at most three products each, plus a plan suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Recommendations {
    pub morning: Vec<ProductResponse>,
    pub evening: Vec<ProductResponse>,
    pub weekly: Vec<ProductResponse>,
    pub plan: PlanType,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SkinQuizResponse {
    pub recommendations: Recommendations,
    pub skin_profile: SkinProfileResponse,
}
