use crate::config::WeatherConfig;
use crate::entities::weather_data::WeatherCondition;
use crate::entities::weather_entity;
use crate::error::AppResult;
use crate::external::OpenWeatherClient;
use crate::models::*;
use crate::services::CatalogService;
use crate::services::recommendation::{adaptation_message, recommend_for_weather};
use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Where readings come from.
#[derive(Clone)]
pub enum WeatherSource {
    Simulated,
    OpenWeather(OpenWeatherClient),
}

impl WeatherSource {
    /// OpenWeatherMap when an API key is configured, otherwise simulated.
    pub fn from_config(cfg: &WeatherConfig) -> AppResult<Self> {
        match cfg.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => Ok(Self::OpenWeather(OpenWeatherClient::new(key.to_string(), cfg)?)),
            None => Ok(Self::Simulated),
        }
    }
}

pub fn simulated_reading(city: &str) -> WeatherReading {
    let mut rng = rand::thread_rng();
    let condition = *WeatherCondition::ALL
        .choose(&mut rng)
        .unwrap_or(&WeatherCondition::Sunny);
    WeatherReading {
        city: city.to_string(),
        temperature: f64::from(rng.gen_range(20..=35)),
        humidity: rng.gen_range(40..=80),
        condition,
    }
}

#[derive(Clone)]
pub struct WeatherService {
    pool: DatabaseConnection,
    source: WeatherSource,
    default_city: String,
    catalog: CatalogService,
}

impl WeatherService {
    pub fn new(
        pool: DatabaseConnection,
        source: WeatherSource,
        default_city: String,
        catalog: CatalogService,
    ) -> Self {
        Self {
            pool,
            source,
            default_city,
            catalog,
        }
    }

    fn resolve_city<'a>(&'a self, city: Option<&'a str>) -> &'a str {
        city.map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.default_city)
    }

    /// Current reading for `city` (or the default city), stored in `weather_data`.
    ///
    /// A failing upstream provider degrades to a simulated reading.
    pub async fn current(&self, city: Option<&str>) -> AppResult<WeatherReading> {
        let city = self.resolve_city(city);
        let reading = match &self.source {
            WeatherSource::Simulated => simulated_reading(city),
            WeatherSource::OpenWeather(client) => match client.current(city).await {
                Ok(reading) => reading,
                Err(e) => {
                    log::warn!("Weather lookup for {city} failed, using simulated reading: {e}");
                    simulated_reading(city)
                }
            },
        };

        weather_entity::ActiveModel {
            city: Set(reading.city.clone()),
            temperature: Set(reading.temperature),
            humidity: Set(reading.humidity),
            weather_condition: Set(reading.condition),
            recorded_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(reading)
    }

    /// Up to five active products suited to a reading.
    pub async fn products_for(&self, reading: &WeatherReading) -> AppResult<Vec<ProductResponse>> {
        let catalog = self.catalog.active_products().await?;
        Ok(recommend_for_weather(reading.condition, &catalog))
    }

    pub async fn adaptive_products(&self, city: Option<&str>) -> AppResult<WeatherAdaptiveResponse> {
        let weather = self.current(city).await?;
        let recommended_products = self.products_for(&weather).await?;
        Ok(WeatherAdaptiveResponse {
            adaptation_message: adaptation_message(&weather),
            weather,
            recommended_products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::services::recommendation::weather_categories;
    use sea_orm::{EntityTrait, PaginatorTrait};

    fn service(pool: &DatabaseConnection) -> WeatherService {
        WeatherService::new(
            pool.clone(),
            WeatherSource::Simulated,
            "Mumbai".to_string(),
            CatalogService::new(pool.clone()),
        )
    }

    #[test]
    fn test_simulated_reading_ranges() {
        for _ in 0..50 {
            let r = simulated_reading("Pune");
            assert_eq!(r.city, "Pune");
            assert!((20.0..=35.0).contains(&r.temperature));
            assert!((40..=80).contains(&r.humidity));
        }
    }

    #[test]
    fn test_source_without_key_is_simulated() {
        let cfg = WeatherConfig {
            api_key: Some("  ".to_string()),
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            default_city: "Mumbai".to_string(),
        };
        assert!(matches!(
            WeatherSource::from_config(&cfg).unwrap(),
            WeatherSource::Simulated
        ));
    }

    #[tokio::test]
    async fn test_readings_are_stored_and_default_city_applies() {
        let pool = test_pool().await;
        let svc = service(&pool);

        let reading = svc.current(None).await.unwrap();
        assert_eq!(reading.city, "Mumbai");
        let other = svc.current(Some(" Delhi ")).await.unwrap();
        assert_eq!(other.city, "Delhi");

        let stored = weather_entity::Entity::find().count(&pool).await.unwrap();
        assert_eq!(stored, 2);
    }

    #[tokio::test]
    async fn test_adaptive_products_match_condition() {
        let pool = test_pool().await;
        let resp = service(&pool).adaptive_products(None).await.unwrap();

        let categories = weather_categories(&resp.weather.condition.to_string());
        assert!(!resp.recommended_products.is_empty());
        assert!(resp.recommended_products.len() <= 5);
        assert!(
            resp.recommended_products
                .iter()
                .all(|p| categories.contains(&p.category))
        );
        assert!(!resp.adaptation_message.is_empty());
    }
}
