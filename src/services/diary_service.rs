use crate::entities::{TagList, diary_entity as diary};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::{Days, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::{BTreeSet, HashMap};

/// Entries older than this many days are left out of the listing.
const HISTORY_DAYS: u64 = 30;
const BEST_PRODUCTS: usize = 2;

/// Tips derived from a single diary entry.
pub fn skin_insights(entry: &diary::Model) -> Vec<String> {
    let mut insights = Vec::new();
    if entry.breakouts {
        insights.push("Consider using our clay-neem purifying mask this week".to_string());
    }
    if entry
        .skin_feeling
        .as_deref()
        .is_some_and(|f| f.eq_ignore_ascii_case("dry"))
    {
        insights.push("Switch to our richer moisturizers for better hydration".to_string());
    }
    if entry.stress_level.unwrap_or(0) > 7 {
        insights.push(
            "High stress detected - our lavender-chamomile evening routine might help".to_string(),
        );
    }
    if entry.sleep_hours.unwrap_or(8.0) < 6.0 {
        insights.push(
            "Low sleep affects skin repair - try our overnight treatment masks".to_string(),
        );
    }
    insights
}

/// Average condition score of the newer half against the older half.
/// `entries` must be oldest first.
pub fn improvement_trend(entries: &[diary::Model]) -> ImprovementTrend {
    if entries.len() < 2 {
        return ImprovementTrend::InsufficientData;
    }
    let (older, newer) = entries.split_at(entries.len() / 2);
    let average = |half: &[diary::Model]| {
        half.iter().map(|e| f64::from(e.skin_condition.score())).sum::<f64>() / half.len() as f64
    };
    let delta = average(newer) - average(older);
    if delta > f64::EPSILON {
        ImprovementTrend::Positive
    } else if delta < -f64::EPSILON {
        ImprovementTrend::Negative
    } else {
        ImprovementTrend::Stable
    }
}

/// Products used most often on good or excellent days, ties broken by name.
pub fn best_performing_products(entries: &[diary::Model]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries.iter().filter(|e| e.skin_condition.is_positive()) {
        for product in entry.products_used.iter() {
            *counts.entry(product.as_str()).or_default() += 1;
        }
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(BEST_PRODUCTS)
        .map(|(name, _)| name.to_string())
        .collect()
}

pub fn progress_summary(entries: &[diary::Model]) -> ProgressSummary {
    let consistent_days = entries
        .iter()
        .map(|e| e.entry_date)
        .collect::<BTreeSet<NaiveDate>>()
        .len();
    ProgressSummary {
        total_entries: entries.len(),
        consistent_days,
        improvement_trend: improvement_trend(entries),
        best_performing_products: best_performing_products(entries),
    }
}

#[derive(Clone)]
pub struct DiaryService {
    pool: DatabaseConnection,
}

impl DiaryService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        req: DiaryEntryRequest,
    ) -> AppResult<DiaryCreatedResponse> {
        let today = Utc::now().date_naive();
        let entry_date = req.entry_date.unwrap_or(today);
        if entry_date > today {
            return Err(AppError::ValidationError(
                "entry_date cannot be in the future".to_string(),
            ));
        }
        if let Some(stress) = req.stress_level
            && !(0..=10).contains(&stress)
        {
            return Err(AppError::ValidationError(
                "stress_level must be between 0 and 10".to_string(),
            ));
        }
        if req.sleep_hours.is_some_and(|h| !(0.0..=24.0).contains(&h)) {
            return Err(AppError::ValidationError(
                "sleep_hours must be between 0 and 24".to_string(),
            ));
        }
        if req.water_intake.is_some_and(|w| w < 0.0) {
            return Err(AppError::ValidationError(
                "water_intake cannot be negative".to_string(),
            ));
        }

        let saved = diary::ActiveModel {
            user_id: Set(user_id),
            entry_date: Set(entry_date),
            skin_condition: Set(req.skin_condition),
            products_used: Set(TagList::parse(&req.products_used)?),
            skin_feeling: Set(req
                .skin_feeling
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())),
            breakouts: Set(req.breakouts),
            sensitivity: Set(req.sensitivity),
            notes: Set(req.notes.unwrap_or_default().trim().to_string()),
            sleep_hours: Set(req.sleep_hours),
            stress_level: Set(req.stress_level),
            water_intake: Set(req.water_intake),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(DiaryCreatedResponse {
            message: "Diary entry saved successfully".to_string(),
            entry_id: saved.id,
            insights: skin_insights(&saved),
        })
    }

    /// Entries from the last 30 days, newest first, with a progress summary.
    pub async fn list(&self, user_id: i64) -> AppResult<DiaryListResponse> {
        let since = Utc::now().date_naive() - Days::new(HISTORY_DAYS - 1);
        let entries = diary::Entity::find()
            .filter(diary::Column::UserId.eq(user_id))
            .filter(diary::Column::EntryDate.gte(since))
            .order_by_asc(diary::Column::EntryDate)
            .order_by_asc(diary::Column::Id)
            .all(&self.pool)
            .await?;

        let progress_summary = progress_summary(&entries);
        let diary_entries = entries
            .into_iter()
            .rev()
            .map(DiaryEntryResponse::from)
            .collect();

        Ok(DiaryListResponse {
            diary_entries,
            progress_summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::entities::skin_diary_entries::SkinCondition;
    use crate::services::test_support::register_user;

    fn entry(days_ago: u64, condition: SkinCondition, products: &[&str]) -> diary::Model {
        diary::Model {
            id: 0,
            user_id: 1,
            entry_date: Utc::now().date_naive() - Days::new(days_ago),
            skin_condition: condition,
            products_used: TagList::parse(products).unwrap(),
            skin_feeling: None,
            breakouts: false,
            sensitivity: false,
            notes: String::new(),
            sleep_hours: None,
            stress_level: None,
            water_intake: None,
            created_at: Utc::now(),
        }
    }

    fn request(condition: SkinCondition) -> DiaryEntryRequest {
        DiaryEntryRequest {
            skin_condition: condition,
            entry_date: None,
            products_used: vec![],
            skin_feeling: None,
            breakouts: false,
            sensitivity: false,
            notes: None,
            sleep_hours: None,
            stress_level: None,
            water_intake: None,
        }
    }

    #[test]
    fn test_insights() {
        let mut e = entry(0, SkinCondition::Average, &[]);
        assert!(skin_insights(&e).is_empty());

        e.breakouts = true;
        e.skin_feeling = Some("Dry".to_string());
        e.stress_level = Some(8);
        e.sleep_hours = Some(5.5);
        let tips = skin_insights(&e);
        assert_eq!(tips.len(), 4);
        assert!(tips[0].contains("clay-neem"));
        assert!(tips[3].contains("overnight"));

        e.stress_level = Some(7);
        e.sleep_hours = Some(6.0);
        assert_eq!(skin_insights(&e).len(), 2);
    }

    #[test]
    fn test_improvement_trend() {
        use SkinCondition::*;
        assert_eq!(improvement_trend(&[]), ImprovementTrend::InsufficientData);
        assert_eq!(
            improvement_trend(&[entry(1, Good, &[])]),
            ImprovementTrend::InsufficientData
        );
        let improving = [entry(3, Poor, &[]), entry(2, Average, &[]), entry(1, Good, &[])];
        assert_eq!(improvement_trend(&improving), ImprovementTrend::Positive);
        let worsening = [entry(2, Excellent, &[]), entry(1, Average, &[])];
        assert_eq!(improvement_trend(&worsening), ImprovementTrend::Negative);
        let flat = [entry(2, Good, &[]), entry(1, Good, &[])];
        assert_eq!(improvement_trend(&flat), ImprovementTrend::Stable);
    }

    #[test]
    fn test_best_performing_products() {
        use SkinCondition::*;
        let entries = [
            entry(4, Good, &["Rose Toner", "Neem Cleanser"]),
            entry(3, Excellent, &["Rose Toner", "Aloe Gel"]),
            entry(2, Poor, &["Aloe Gel", "Aloe Gel Night"]),
            entry(1, Good, &["Aloe Gel"]),
        ];
        assert_eq!(
            best_performing_products(&entries),
            vec!["Aloe Gel".to_string(), "Rose Toner".to_string()]
        );
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;
        let svc = DiaryService::new(pool);
        let today = Utc::now().date_naive();

        let mut older = request(SkinCondition::Poor);
        older.entry_date = Some(today - Days::new(3));
        older.breakouts = true;
        let created = svc.create(user.id, older).await.unwrap();
        assert_eq!(created.insights.len(), 1);

        let mut stale = request(SkinCondition::Excellent);
        stale.entry_date = Some(today - Days::new(45));
        svc.create(user.id, stale).await.unwrap();

        let mut recent = request(SkinCondition::Excellent);
        recent.products_used = vec!["Saffron Night Cream".to_string()];
        svc.create(user.id, recent).await.unwrap();
        svc.create(user.id, request(SkinCondition::Good)).await.unwrap();

        let list = svc.list(user.id).await.unwrap();
        assert_eq!(list.diary_entries.len(), 3);
        assert_eq!(list.diary_entries[0].entry_date, today);
        let summary = list.progress_summary;
        assert_eq!(summary.total_entries, 3);
        assert_eq!(summary.consistent_days, 2);
        assert_eq!(summary.improvement_trend, ImprovementTrend::Positive);
        assert_eq!(summary.best_performing_products, vec!["Saffron Night Cream"]);
    }

    #[tokio::test]
    async fn test_create_validation() {
        let pool = test_pool().await;
        let user = register_user(&pool, "asha@example.com").await;
        let svc = DiaryService::new(pool);

        let mut stressed = request(SkinCondition::Good);
        stressed.stress_level = Some(11);
        assert!(matches!(
            svc.create(user.id, stressed).await,
            Err(AppError::ValidationError(_))
        ));

        let mut future = request(SkinCondition::Good);
        future.entry_date = Some(Utc::now().date_naive() + Days::new(2));
        assert!(matches!(
            svc.create(user.id, future).await,
            Err(AppError::ValidationError(_))
        ));
    }
}
