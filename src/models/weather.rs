use crate::entities::weather_data::WeatherCondition;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::ProductResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherReading {
    pub city: String,
    /// Celsius
    pub temperature: f64,
    /// Percent
    pub humidity: i32,
    pub condition: WeatherCondition,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// Defaults to the configured city
    pub city: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherAdaptiveResponse {
    pub weather: WeatherReading,
    pub recommended_products: Vec<ProductResponse>,
    pub adaptation_message: String,
}
