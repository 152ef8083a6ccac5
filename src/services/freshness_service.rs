use crate::entities::{
    product_batch_entity as batches, product_entity as products, user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::{CatalogService, PreferenceService, ProfileService, WeatherService};
use crate::utils::generate_batch_number;
use chrono::{DateTime, Days, Duration, NaiveTime, Utc};
use rand::seq::SliceRandom;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};

const FRESHNESS_GUARANTEE: &str =
    "All products are made fresh daily and delivered within 4 hours of preparation";
const DEFAULT_QUALITY_SCORE: f64 = 5.0;

pub fn daily_greeting(name: &str) -> String {
    let templates = [
        format!(
            "Good morning {name}! Today's products were prepared at 5 AM with fresh ingredients from our partner farms."
        ),
        format!("Hello {name}! Your skincare selection is ready - made with love and zero preservatives!"),
        format!(
            "Fresh morning to you {name}! Today's batch includes seasonal ingredients perfect for your skin."
        ),
        format!("Rise and shine {name}! Your chemical-free skincare routine is prepared and on its way!"),
    ];
    templates
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default()
}

pub fn preparation_schedule(now: DateTime<Utc>) -> PreparationSchedule {
    PreparationSchedule {
        next_preparation: (now + Duration::hours(18))
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        cut_off_time: (now + Duration::hours(2)).format("%H:%M").to_string(),
        message: "Order by cut-off time to get tomorrow's fresh batch".to_string(),
    }
}

fn step(step: u32, product: &str, time: &str, instruction: &str) -> RoutineStep {
    RoutineStep {
        step,
        product: product.to_string(),
        time: time.to_string(),
        instruction: instruction.to_string(),
    }
}

fn treatment(frequency: &str, product: &str, day: &str) -> WeeklyTreatment {
    WeeklyTreatment {
        frequency: frequency.to_string(),
        product: product.to_string(),
        day: day.to_string(),
    }
}

fn routine_template() -> (RoutineSession, RoutineSession, Vec<WeeklyTreatment>) {
    let morning = RoutineSession {
        steps: vec![
            step(1, "Gentle Cleanser", "30 seconds", "Massage gently with damp hands"),
            step(2, "Hydrating Toner", "1 minute", "Pat gently into skin"),
            step(3, "Vitamin C Serum", "2 minutes", "Apply and let absorb"),
            step(4, "Daily Moisturizer", "1 minute", "Apply in upward motions"),
        ],
        total_time: "4-5 minutes".to_string(),
    };
    let evening = RoutineSession {
        steps: vec![
            step(1, "Deep Cleanser", "1 minute", "Double cleanse if wearing makeup"),
            step(2, "Treatment Toner", "1 minute", "Use cotton pad or pat with hands"),
            step(3, "Night Serum", "2 minutes", "Focus on concern areas"),
            step(4, "Night Moisturizer", "1 minute", "Apply generously"),
        ],
        total_time: "5-6 minutes".to_string(),
    };
    let weekly = vec![
        treatment("2x per week", "Exfoliating Mask", "Wednesday, Sunday"),
        treatment("1x per week", "Deep Hydration Mask", "Saturday"),
        treatment("1x per week", "Eye Treatment", "Friday"),
    ];
    (morning, evening, weekly)
}

fn results_timeline() -> BTreeMap<String, String> {
    [
        ("1 week", "Improved skin texture and hydration"),
        ("2 weeks", "Reduced irritation and better skin barrier"),
        ("4 weeks", "Visible improvement in skin concerns"),
        ("8 weeks", "Significant transformation and glow"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[derive(Clone)]
pub struct FreshnessService {
    pool: DatabaseConnection,
    catalog: CatalogService,
    profiles: ProfileService,
    preferences: PreferenceService,
    weather: WeatherService,
}

impl FreshnessService {
    pub fn new(
        pool: DatabaseConnection,
        catalog: CatalogService,
        profiles: ProfileService,
        preferences: PreferenceService,
        weather: WeatherService,
    ) -> Self {
        Self {
            pool,
            catalog,
            profiles,
            preferences,
            weather,
        }
    }

    /// Records a prepared batch; it expires after the product's shelf life.
    pub async fn record_batch(&self, batch: NewBatch) -> AppResult<batches::Model> {
        if batch.quantity_prepared <= 0 {
            return Err(AppError::ValidationError(
                "quantity_prepared must be positive".to_string(),
            ));
        }
        let quality_score = batch.quality_score.unwrap_or(DEFAULT_QUALITY_SCORE);
        if !(0.0..=5.0).contains(&quality_score) {
            return Err(AppError::ValidationError(
                "quality_score must be between 0 and 5".to_string(),
            ));
        }
        let location = batch.preparation_location.trim();
        if location.is_empty() {
            return Err(AppError::ValidationError(
                "preparation_location is required".to_string(),
            ));
        }

        let product = self.catalog.get_product(batch.product_id).await?;
        let expiry = batch.prepared_at + Duration::hours(i64::from(product.shelf_life_hours));

        let saved = batches::ActiveModel {
            product_id: Set(product.id),
            batch_number: Set(generate_batch_number(
                batch.prepared_at.date_naive(),
                product.id,
            )),
            preparation_date: Set(batch.prepared_at),
            expiry_datetime: Set(expiry),
            quantity_prepared: Set(batch.quantity_prepared),
            preparation_location: Set(location.to_string()),
            quality_score: Set(quality_score),
            ingredients_source: Set(batch.ingredients_source),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "Batch number already used"))?;

        log::info!(
            "Recorded batch {} of {} ({} units) at {}",
            saved.batch_number,
            product.name,
            saved.quantity_prepared,
            saved.preparation_location
        );
        Ok(saved)
    }

    /// Batches prepared on the UTC day of `now`.
    async fn prepared_on_day_of(&self, now: DateTime<Utc>) -> AppResult<Vec<batches::Model>> {
        let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let end = start + Days::new(1);
        let rows = batches::Entity::find()
            .filter(batches::Column::PreparationDate.gte(start))
            .filter(batches::Column::PreparationDate.lt(end))
            .order_by_asc(batches::Column::PreparationDate)
            .order_by_asc(batches::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn product_names(&self, rows: &[batches::Model]) -> AppResult<HashMap<i64, String>> {
        let ids: BTreeSet<i64> = rows.iter().map(|b| b.product_id).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let names = products::Entity::find()
            .filter(products::Column::Id.is_in(ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();
        Ok(names)
    }

    /// Today's batches that have not expired yet.
    pub async fn fresh_batches(&self, now: DateTime<Utc>) -> AppResult<FreshBatchesResponse> {
        let rows: Vec<batches::Model> = self
            .prepared_on_day_of(now)
            .await?
            .into_iter()
            .filter(|b| b.expiry_datetime > now)
            .collect();
        let names = self.product_names(&rows).await?;

        let fresh_batches: Vec<FreshBatchResponse> = rows
            .into_iter()
            .map(|b| {
                let name = names.get(&b.product_id).cloned();
                FreshBatchResponse::new(b, name, now)
            })
            .collect();

        Ok(FreshBatchesResponse {
            total_fresh_products: fresh_batches.len(),
            fresh_batches,
            freshness_guarantee: FRESHNESS_GUARANTEE.to_string(),
        })
    }

    pub async fn daily_report(
        &self,
        user: &users::Model,
        city: Option<&str>,
    ) -> AppResult<DailyFreshReportResponse> {
        let now = Utc::now();
        let today = self.prepared_on_day_of(now).await?;

        let preparation_locations: Vec<String> = today
            .iter()
            .map(|b| b.preparation_location.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let average_freshness_hours = if today.is_empty() {
            0.0
        } else {
            let total: i64 = today.iter().map(|b| b.freshness_hours_left(now)).sum();
            total as f64 / today.len() as f64
        };

        let current_weather = self.weather.current(city).await?;
        let weather_adapted_selection = match self.profiles.skin_profile(user.id).await? {
            Some(_) => self.weather.products_for(&current_weather).await?,
            None => Vec::new(),
        };

        Ok(DailyFreshReportResponse {
            freshness_report: FreshnessReport {
                date: now.date_naive(),
                total_fresh_products: today.len(),
                preparation_locations,
                average_freshness_hours,
                weather_adapted_selection,
                current_weather,
                quality_assurance: QualityAssurance {
                    all_products_tested: true,
                    organic_certification: true,
                    preparation_time: "Within 4 hours of delivery".to_string(),
                    temperature_controlled: true,
                },
            },
            personalized_message: daily_greeting(&user.name),
            next_preparation_time: preparation_schedule(now),
        })
    }

    pub async fn personalized_routine(
        &self,
        user: &users::Model,
    ) -> AppResult<PersonalizedRoutineResponse> {
        let profile = self.profiles.skin_profile(user.id).await?.ok_or_else(|| {
            AppError::ValidationError("Please complete your skin quiz first".to_string())
        })?;
        let delivery_preference = self
            .preferences
            .find(user.id)
            .await?
            .map(|p| p.delivery_time_preference);

        let (morning, evening, weekly_treatments) = routine_template();
        let today = Utc::now().date_naive();

        Ok(PersonalizedRoutineResponse {
            personalized_routine: PersonalizedRoutine {
                morning,
                evening,
                weekly_treatments,
                skin_concerns_focus: profile.skin_concerns,
                expected_results_timeline: results_timeline(),
                delivery_preference,
            },
            routine_duration: "4-6 weeks for visible results".to_string(),
            next_review_date: today + Days::new(28),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::entities::customization_preferences::DeliveryTimePreference;
    use crate::services::test_support::register_user;
    use crate::services::weather_service::WeatherSource;

    fn service(pool: &DatabaseConnection) -> FreshnessService {
        let catalog = CatalogService::new(pool.clone());
        FreshnessService::new(
            pool.clone(),
            catalog.clone(),
            ProfileService::new(pool.clone(), catalog.clone()),
            PreferenceService::new(pool.clone()),
            WeatherService::new(
                pool.clone(),
                WeatherSource::Simulated,
                "Mumbai".to_string(),
                catalog,
            ),
        )
    }

    fn new_batch(product_id: i64, prepared_at: DateTime<Utc>, location: &str) -> NewBatch {
        NewBatch {
            product_id,
            prepared_at,
            quantity_prepared: 40,
            preparation_location: location.to_string(),
            quality_score: None,
            ingredients_source: Some("Nashik organic farms".to_string()),
        }
    }

    async fn first_product(pool: &DatabaseConnection) -> products::Model {
        products::Entity::find()
            .order_by_asc(products::Column::Id)
            .one(pool)
            .await
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_preparation_schedule_format() {
        let now = DateTime::parse_from_rfc3339("2025-03-01T10:15:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let s = preparation_schedule(now);
        assert_eq!(s.next_preparation, "2025-03-02 04:15");
        assert_eq!(s.cut_off_time, "12:15");
    }

    #[test]
    fn test_daily_greeting_mentions_name() {
        for _ in 0..10 {
            assert!(daily_greeting("Asha").contains("Asha"));
        }
    }

    #[tokio::test]
    async fn test_record_batch_uses_shelf_life() {
        let pool = test_pool().await;
        let product = first_product(&pool).await;
        let now = Utc::now();

        let batch = service(&pool)
            .record_batch(new_batch(product.id, now, " Mumbai Central Kitchen "))
            .await
            .unwrap();
        assert_eq!(
            batch.expiry_datetime - batch.preparation_date,
            Duration::hours(i64::from(product.shelf_life_hours))
        );
        assert_eq!(batch.preparation_location, "Mumbai Central Kitchen");
        assert_eq!(batch.quality_score, DEFAULT_QUALITY_SCORE);
        assert!(batch.batch_number.starts_with("FB"));
    }

    #[tokio::test]
    async fn test_record_batch_rejects_bad_input() {
        let pool = test_pool().await;
        let svc = service(&pool);
        let product = first_product(&pool).await;

        let mut zero = new_batch(product.id, Utc::now(), "Kitchen");
        zero.quantity_prepared = 0;
        assert!(matches!(
            svc.record_batch(zero).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            svc.record_batch(new_batch(9_999, Utc::now(), "Kitchen")).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_fresh_batches_only_today_and_unexpired() {
        let pool = test_pool().await;
        let svc = service(&pool);
        let product = first_product(&pool).await;
        let now = Utc::now();

        svc.record_batch(new_batch(product.id, now, "Mumbai Central Kitchen"))
            .await
            .unwrap();
        svc.record_batch(new_batch(product.id, now - Days::new(1), "Mumbai Central Kitchen"))
            .await
            .unwrap();

        // prepared at midnight and already expired
        let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        batches::ActiveModel {
            product_id: Set(product.id),
            batch_number: Set("FB-EXPIRED".to_string()),
            preparation_date: Set(midnight),
            expiry_datetime: Set(midnight),
            quantity_prepared: Set(5),
            preparation_location: Set("Bandra Kitchen".to_string()),
            quality_score: Set(4.5),
            ingredients_source: Set(None),
            ..Default::default()
        }
        .insert(&pool)
        .await
        .unwrap();

        let resp = svc.fresh_batches(now).await.unwrap();
        assert_eq!(resp.total_fresh_products, 1);
        assert_eq!(resp.fresh_batches[0].product_name.as_deref(), Some(product.name.as_str()));
        assert!(resp.fresh_batches[0].freshness_hours_left > 0);
        assert_eq!(resp.freshness_guarantee, FRESHNESS_GUARANTEE);
    }

    #[tokio::test]
    async fn test_daily_report_without_skin_profile() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;

        let report = service(&pool).daily_report(&user, Some("Delhi")).await.unwrap();
        let body = &report.freshness_report;
        assert_eq!(body.total_fresh_products, 0);
        assert_eq!(body.average_freshness_hours, 0.0);
        assert!(body.weather_adapted_selection.is_empty());
        assert_eq!(body.current_weather.city, "Delhi");
        assert_eq!(body.quality_assurance.preparation_time, "Within 4 hours of delivery");
        assert!(report.personalized_message.contains(&user.name));
    }

    #[tokio::test]
    async fn test_daily_report_with_batches_and_profile() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;
        let svc = service(&pool);
        svc.profiles
            .upsert_skin_profile(
                user.id,
                SkinQuizRequest {
                    skin_type: Some("dry".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let product = first_product(&pool).await;
        let now = Utc::now();
        for location in ["Andheri Kitchen", "Andheri Kitchen", "Powai Kitchen"] {
            svc.record_batch(new_batch(product.id, now, location))
                .await
                .unwrap();
        }

        let report = svc.daily_report(&user, None).await.unwrap();
        let body = report.freshness_report;
        assert_eq!(body.total_fresh_products, 3);
        assert_eq!(body.preparation_locations, vec!["Andheri Kitchen", "Powai Kitchen"]);
        assert!(body.average_freshness_hours > 0.0);
        assert!(!body.weather_adapted_selection.is_empty());
    }

    #[tokio::test]
    async fn test_personalized_routine() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;
        let svc = service(&pool);

        let missing = svc.personalized_routine(&user).await;
        assert!(matches!(missing, Err(AppError::ValidationError(_))));

        svc.profiles
            .upsert_skin_profile(
                user.id,
                SkinQuizRequest {
                    skin_type: Some("oily".to_string()),
                    concerns: vec!["acne".to_string(), "dullness".to_string()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        svc.preferences
            .upsert(
                user.id,
                PreferenceRequest {
                    delivery_time_preference: Some(DeliveryTimePreference::Evening),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let resp = svc.personalized_routine(&user).await.unwrap();
        let routine = resp.personalized_routine;
        assert_eq!(routine.morning.steps.len(), 4);
        assert_eq!(routine.evening.steps[0].product, "Deep Cleanser");
        assert_eq!(routine.weekly_treatments.len(), 3);
        assert_eq!(routine.skin_concerns_focus.joined(), "acne, dullness");
        assert_eq!(routine.delivery_preference, Some(DeliveryTimePreference::Evening));
        assert_eq!(routine.expected_results_timeline.len(), 4);
        assert_eq!(resp.next_review_date, Utc::now().date_naive() + Days::new(28));
    }
}
