use crate::entities::{
    TagList, plan_entity as plans, preference_entity as preferences,
    skin_profile_entity as skin_profiles, user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::CatalogService;
use crate::services::auth_service::normalize_phone;
use crate::services::recommendation::recommend;
use crate::utils::validate_name;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};

#[derive(Clone)]
pub struct ProfileService {
    pool: DatabaseConnection,
    catalog: CatalogService,
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ProfileService {
    pub fn new(pool: DatabaseConnection, catalog: CatalogService) -> Self {
        Self { pool, catalog }
    }

    /// Inserts or fully replaces the user's single skin profile.
    pub async fn upsert_skin_profile(
        &self,
        user_id: i64,
        answers: SkinQuizRequest,
    ) -> AppResult<skin_profiles::Model> {
        let skin_type = answers
            .skin_type
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("skin_type is required".to_string()))?;

        let am = skin_profiles::ActiveModel {
            user_id: Set(user_id),
            skin_type: Set(skin_type),
            skin_concerns: Set(TagList::parse(&answers.concerns)?),
            allergies: Set(TagList::parse(&answers.allergies)?),
            preferred_ingredients: Set(TagList::parse(&answers.preferred_ingredients)?),
            skin_tone: Set(optional_text(answers.skin_tone)),
            routine_frequency: Set(optional_text(answers.routine_frequency)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        skin_profiles::Entity::insert(am)
            .on_conflict(
                OnConflict::column(skin_profiles::Column::UserId)
                    .update_columns([
                        skin_profiles::Column::SkinType,
                        skin_profiles::Column::SkinConcerns,
                        skin_profiles::Column::Allergies,
                        skin_profiles::Column::PreferredIngredients,
                        skin_profiles::Column::SkinTone,
                        skin_profiles::Column::RoutineFrequency,
                        skin_profiles::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.pool)
            .await?;

        self.skin_profile(user_id)
            .await?
            .ok_or_else(|| AppError::InternalError("Skin profile missing after upsert".to_string()))
    }

    pub async fn skin_profile(&self, user_id: i64) -> AppResult<Option<skin_profiles::Model>> {
        let profile = skin_profiles::Entity::find()
            .filter(skin_profiles::Column::UserId.eq(user_id))
            .one(&self.pool)
            .await?;
        Ok(profile)
    }

    /// Stores the quiz answers and recommends from the active catalog.
    pub async fn submit_quiz(
        &self,
        user_id: i64,
        answers: SkinQuizRequest,
    ) -> AppResult<SkinQuizResponse> {
        let profile = self.upsert_skin_profile(user_id, answers).await?;
        let catalog = self.catalog.active_products().await?;
        let recommendations = recommend(&profile, &catalog);

        Ok(SkinQuizResponse {
            recommendations,
            skin_profile: SkinProfileResponse::from(profile),
        })
    }

    pub async fn get_profile(&self, user: &users::Model) -> AppResult<ProfileResponse> {
        let skin_profile = self.skin_profile(user.id).await?;

        let subscription = match user.subscription_plan_id {
            Some(plan_id) => plans::Entity::find_by_id(plan_id).one(&self.pool).await?,
            None => None,
        };

        let prefs = preferences::Entity::find()
            .filter(preferences::Column::UserId.eq(user.id))
            .one(&self.pool)
            .await?;

        Ok(ProfileResponse {
            user: UserResponse::from(user.clone()),
            skin_profile: skin_profile.map(SkinProfileResponse::from),
            subscription: subscription.map(PlanResponse::from),
            preferences: prefs.map(PreferenceResponse::from),
        })
    }

    pub async fn update_profile(
        &self,
        user: users::Model,
        request: UpdateProfileRequest,
    ) -> AppResult<UserResponse> {
        if request.name.is_none() && request.phone.is_none() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }

        let name = request.name.as_deref().map(validate_name).transpose()?;
        let phone = match request.phone.as_deref() {
            Some(p) => Some(normalize_phone(Some(p))?),
            None => None,
        };

        let mut am = user.into_active_model();
        if let Some(name) = name {
            am.name = Set(name);
        }
        if let Some(phone) = phone {
            am.phone = Set(phone);
        }
        am.updated_at = Set(Utc::now());
        let updated = am.update(&self.pool).await?;

        Ok(UserResponse::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::services::test_support::register_user;
    use sea_orm::PaginatorTrait;

    fn service(pool: &DatabaseConnection) -> ProfileService {
        ProfileService::new(pool.clone(), CatalogService::new(pool.clone()))
    }

    fn quiz(skin_type: &str, concerns: &[&str]) -> SkinQuizRequest {
        SkinQuizRequest {
            skin_type: Some(skin_type.to_string()),
            concerns: concerns.iter().map(|c| c.to_string()).collect(),
            allergies: vec!["nuts".into()],
            preferred_ingredients: vec![],
            skin_tone: Some("medium".into()),
            routine_frequency: None,
        }
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_row() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;
        let svc = service(&pool);

        let first = svc
            .upsert_skin_profile(user.id, quiz("oily", &["acne", "pores"]))
            .await
            .unwrap();

        let mut second_answers = quiz("Dry", &["dullness"]);
        second_answers.allergies = vec![];
        second_answers.skin_tone = None;
        let second = svc.upsert_skin_profile(user.id, second_answers).await.unwrap();

        let rows = skin_profiles::Entity::find()
            .filter(skin_profiles::Column::UserId.eq(user.id))
            .count(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(second.id, first.id);
        assert_eq!(second.skin_type, "dry");
        assert_eq!(second.skin_concerns.0, vec!["dullness"]);
        assert!(second.allergies.is_empty());
        assert_eq!(second.skin_tone, None);
    }

    #[tokio::test]
    async fn test_skin_type_is_required() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;
        let mut answers = quiz("", &[]);
        answers.skin_type = Some("   ".into());

        assert!(matches!(
            service(&pool).upsert_skin_profile(user.id, answers).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_quiz_recommends_for_skin_type() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;

        let resp = service(&pool)
            .submit_quiz(user.id, quiz("dry", &["dullness"]))
            .await
            .unwrap();
        let rec = &resp.recommendations;

        let all: Vec<&ProductResponse> = rec
            .morning
            .iter()
            .chain(&rec.evening)
            .chain(&rec.weekly)
            .collect();
        assert!(!all.is_empty());
        assert!(all.iter().all(|p| p.skin_types.contains_tag("dry")));
        assert!(rec.morning.len() <= 3 && rec.evening.len() <= 3 && rec.weekly.len() <= 3);
    }

    #[tokio::test]
    async fn test_update_profile() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;
        let svc = service(&pool);

        let empty = svc
            .update_profile(user.clone(), UpdateProfileRequest::default())
            .await;
        assert!(matches!(empty, Err(AppError::ValidationError(_))));

        let updated = svc
            .update_profile(
                user.clone(),
                UpdateProfileRequest {
                    name: Some("Asha R".into()),
                    phone: Some("+91 90000 11111".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Asha R");
        assert_eq!(updated.phone.as_deref(), Some("+91 90000 11111"));

        let profile = svc.get_profile(&user).await.unwrap();
        assert!(profile.skin_profile.is_none());
        assert!(profile.subscription.is_none());
        assert!(profile.preferences.is_none());
    }
}
