use crate::middlewares::CurrentUser;
use crate::models::*;
use crate::services::sustainability::{eco_badge_level, next_eco_milestone, sustainability_metrics};
use crate::services::{DiaryService, FeedbackService, OrderService, ReferralService, content};
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/feedback",
    tag = "engagement",
    request_body = FeedbackRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Feedback recorded", body = FeedbackResponse),
        (status = 400, description = "Rating out of range", body = ApiErrorResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse),
        (status = 404, description = "Order or product not found", body = ApiErrorResponse)
    )
)]
pub async fn submit_feedback(
    feedback_service: web::Data<FeedbackService>,
    CurrentUser(user): CurrentUser,
    request: web::Json<FeedbackRequest>,
) -> Result<HttpResponse> {
    match feedback_service.submit(user.id, request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Created().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/skin-diary",
    tag = "engagement",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Last 30 days of entries", body = DiaryListResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn list_diary(
    diary_service: web::Data<DiaryService>,
    CurrentUser(user): CurrentUser,
) -> Result<HttpResponse> {
    match diary_service.list(user.id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/skin-diary",
    tag = "engagement",
    request_body = DiaryEntryRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Entry saved", body = DiaryCreatedResponse),
        (status = 400, description = "Invalid entry", body = ApiErrorResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn create_diary_entry(
    diary_service: web::Data<DiaryService>,
    CurrentUser(user): CurrentUser,
    request: web::Json<DiaryEntryRequest>,
) -> Result<HttpResponse> {
    match diary_service.create(user.id, request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Created().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/referral-program",
    tag = "engagement",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Referral statistics", body = ReferralDashboardResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn referral_dashboard(
    referral_service: web::Data<ReferralService>,
    CurrentUser(user): CurrentUser,
) -> Result<HttpResponse> {
    match referral_service.dashboard(&user).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/referral-program",
    tag = "engagement",
    request_body = ReferralRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Invitation sent", body = ReferralCreatedResponse),
        (status = 400, description = "Invalid or duplicate invitation", body = ApiErrorResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn create_referral(
    referral_service: web::Data<ReferralService>,
    CurrentUser(user): CurrentUser,
    request: web::Json<ReferralRequest>,
) -> Result<HttpResponse> {
    match referral_service.invite(&user, request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/community-tips",
    tag = "engagement",
    responses(
        (status = 200, description = "Community tips, featured ingredient and a DIY tip")
    )
)]
pub async fn community_tips() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(content::community_tips()))
}

#[utoipa::path(
    get,
    path = "/sustainability-impact",
    tag = "engagement",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Environmental impact of the user's orders", body = SustainabilityResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn sustainability_impact(
    order_service: web::Data<OrderService>,
    CurrentUser(user): CurrentUser,
) -> Result<HttpResponse> {
    match order_service.count_orders(user.id).await {
        Ok(total_orders) => Ok(HttpResponse::Ok().json(SustainabilityResponse {
            sustainability_impact: sustainability_metrics(total_orders),
            eco_badge_level: eco_badge_level(total_orders).to_string(),
            next_milestone: next_eco_milestone(total_orders),
        })),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn engagement_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/feedback", web::post().to(submit_feedback))
        .service(
            web::resource("/skin-diary")
                .route(web::get().to(list_diary))
                .route(web::post().to(create_diary_entry)),
        )
        .service(
            web::resource("/referral-program")
                .route(web::get().to(referral_dashboard))
                .route(web::post().to(create_referral)),
        )
        .route("/community-tips", web::get().to(community_tips))
        .route(
            "/sustainability-impact",
            web::get().to(sustainability_impact),
        );
}
