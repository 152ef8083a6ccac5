use crate::config::WeatherConfig;
use crate::entities::weather_data::WeatherCondition;
use crate::error::{AppError, AppResult};
use crate::models::WeatherReading;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// OpenWeatherMap "current weather" client.
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, cfg: &WeatherConfig) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("freskin-backend/weather")
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn current(&self, city: &str) -> AppResult<WeatherReading> {
        let resp = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::ExternalApiError(format!(
                "OpenWeatherMap HTTP {}: {}",
                status.as_u16(),
                text
            )));
        }

        let body: CurrentWeather = resp.json().await?;
        let main_kind = body
            .weather
            .first()
            .map(|w| w.main.as_str())
            .unwrap_or_default();
        let humidity = body.main.humidity;
        let wind = body.wind.map(|w| w.speed).unwrap_or(0.0);

        Ok(WeatherReading {
            city: body.name.unwrap_or_else(|| city.to_string()),
            temperature: body.main.temp,
            humidity,
            condition: classify(main_kind, humidity, wind),
        })
    }
}

/// Folds an OpenWeatherMap reading into the five conditions products are
/// adapted for.
pub fn classify(main_kind: &str, humidity: i32, wind_speed: f64) -> WeatherCondition {
    match main_kind {
        "Rain" | "Drizzle" | "Thunderstorm" => WeatherCondition::Rainy,
        _ if wind_speed >= 8.0 => WeatherCondition::Windy,
        _ if humidity >= 70 => WeatherCondition::Humid,
        _ if humidity <= 35 => WeatherCondition::Dry,
        "Clear" => WeatherCondition::Sunny,
        _ if humidity >= 55 => WeatherCondition::Humid,
        _ => WeatherCondition::Dry,
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    #[serde(default)]
    name: Option<String>,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
    #[serde(default)]
    wind: Option<WindBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct WeatherBlock {
    main: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("Drizzle", 90, 1.0), WeatherCondition::Rainy);
        assert_eq!(classify("Clear", 50, 10.0), WeatherCondition::Windy);
        assert_eq!(classify("Clear", 80, 2.0), WeatherCondition::Humid);
        assert_eq!(classify("Clouds", 20, 2.0), WeatherCondition::Dry);
        assert_eq!(classify("Clear", 45, 2.0), WeatherCondition::Sunny);
        assert_eq!(classify("Haze", 60, 2.0), WeatherCondition::Humid);
    }

    #[test]
    fn test_parse_current_weather_payload() {
        let payload = r#"{
            "name": "Mumbai",
            "main": {"temp": 31.4, "humidity": 74, "pressure": 1008},
            "weather": [{"id": 721, "main": "Haze", "description": "haze"}],
            "wind": {"speed": 3.6, "deg": 270}
        }"#;
        let body: CurrentWeather = serde_json::from_str(payload).unwrap();
        assert_eq!(body.main.humidity, 74);
        assert_eq!(body.weather[0].main, "Haze");
        assert_eq!(body.wind.unwrap().speed, 3.6);
    }
}
