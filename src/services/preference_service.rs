use crate::entities::preference_entity as preferences;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

#[derive(Clone)]
pub struct PreferenceService {
    pool: DatabaseConnection,
}

impl PreferenceService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn find(&self, user_id: i64) -> AppResult<Option<preferences::Model>> {
        let row = preferences::Entity::find()
            .filter(preferences::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Stored preferences, or the defaults when the user never saved any.
    pub async fn get(&self, user_id: i64) -> AppResult<PreferenceResponse> {
        Ok(self
            .find(user_id)
            .await?
            .map(PreferenceResponse::from)
            .unwrap_or_default())
    }

    /// Replaces the user's preferences; fields left out fall back to defaults.
    pub async fn upsert(
        &self,
        user_id: i64,
        req: PreferenceRequest,
    ) -> AppResult<PreferenceResponse> {
        let defaults = PreferenceResponse::default();
        let now = Utc::now();

        let am = preferences::ActiveModel {
            user_id: Set(user_id),
            delivery_time_preference: Set(req
                .delivery_time_preference
                .unwrap_or(defaults.delivery_time_preference)),
            frequency: Set(req.frequency.unwrap_or(defaults.frequency)),
            packaging_preference: Set(req
                .packaging_preference
                .unwrap_or(defaults.packaging_preference)),
            special_dietary_restrictions: Set(req
                .special_dietary_restrictions
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.special_dietary_restrictions)),
            weather_adaptation: Set(req.weather_adaptation.unwrap_or(defaults.weather_adaptation)),
            stress_level_consideration: Set(req
                .stress_level_consideration
                .unwrap_or(defaults.stress_level_consideration)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        preferences::Entity::insert(am)
            .on_conflict(
                OnConflict::column(preferences::Column::UserId)
                    .update_columns([
                        preferences::Column::DeliveryTimePreference,
                        preferences::Column::Frequency,
                        preferences::Column::PackagingPreference,
                        preferences::Column::SpecialDietaryRestrictions,
                        preferences::Column::WeatherAdaptation,
                        preferences::Column::StressLevelConsideration,
                        preferences::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.pool)
            .await?;

        log::info!("Saved customization preferences for user {user_id}");

        self.find(user_id)
            .await?
            .map(PreferenceResponse::from)
            .ok_or_else(|| AppError::InternalError("Preferences missing after upsert".to_string()))
    }
}
