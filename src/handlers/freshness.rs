use crate::middlewares::CurrentUser;
use crate::models::*;
use crate::services::{FreshnessService, WeatherService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/weather-adaptive-products",
    tag = "freshness",
    params(CityQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Products suited to today's weather", body = WeatherAdaptiveResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn weather_adaptive_products(
    weather_service: web::Data<WeatherService>,
    _user: CurrentUser,
    query: web::Query<CityQuery>,
) -> Result<HttpResponse> {
    match weather_service.adaptive_products(query.city.as_deref()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/personalized-routine",
    tag = "freshness",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Step-by-step routine", body = PersonalizedRoutineResponse),
        (status = 400, description = "Skin quiz not completed", body = ApiErrorResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn personalized_routine(
    freshness_service: web::Data<FreshnessService>,
    CurrentUser(user): CurrentUser,
) -> Result<HttpResponse> {
    match freshness_service.personalized_routine(&user).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/fresh-batches",
    tag = "freshness",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Unexpired batches prepared today", body = FreshBatchesResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn fresh_batches(
    freshness_service: web::Data<FreshnessService>,
    _user: CurrentUser,
) -> Result<HttpResponse> {
    match freshness_service.fresh_batches(Utc::now()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/daily-fresh-report",
    tag = "freshness",
    params(CityQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Today's freshness report", body = DailyFreshReportResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn daily_fresh_report(
    freshness_service: web::Data<FreshnessService>,
    CurrentUser(user): CurrentUser,
    query: web::Query<CityQuery>,
) -> Result<HttpResponse> {
    match freshness_service
        .daily_report(&user, query.city.as_deref())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn freshness_config(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/weather-adaptive-products",
        web::get().to(weather_adaptive_products),
    )
    .route("/personalized-routine", web::get().to(personalized_routine))
    .route("/fresh-batches", web::get().to(fresh_batches))
    .route("/daily-fresh-report", web::get().to(daily_fresh_report));
}
