use crate::middlewares::CurrentUser;
use crate::models::*;
use crate::services::{PreferenceService, ProfileService};
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/skin-quiz",
    tag = "profile",
    request_body = SkinQuizRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile stored, products recommended", body = SkinQuizResponse),
        (status = 400, description = "Invalid answers", body = ApiErrorResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn skin_quiz(
    profile_service: web::Data<ProfileService>,
    CurrentUser(user): CurrentUser,
    request: web::Json<SkinQuizRequest>,
) -> Result<HttpResponse> {
    match profile_service.submit_quiz(user.id, request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account, skin profile, plan and preferences", body = ProfileResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn get_profile(
    profile_service: web::Data<ProfileService>,
    CurrentUser(user): CurrentUser,
) -> Result<HttpResponse> {
    match profile_service.get_profile(&user).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "profile",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile updated", body = UpdateProfileResponse),
        (status = 400, description = "Nothing to update or invalid value", body = ApiErrorResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn update_profile(
    profile_service: web::Data<ProfileService>,
    CurrentUser(user): CurrentUser,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    match profile_service
        .update_profile(user, request.into_inner())
        .await
    {
        Ok(user) => Ok(HttpResponse::Ok().json(UpdateProfileResponse {
            message: "Profile updated successfully".to_string(),
            user,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/customization-preferences",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stored preferences or defaults", body = PreferenceEnvelope),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn get_preferences(
    preference_service: web::Data<PreferenceService>,
    CurrentUser(user): CurrentUser,
) -> Result<HttpResponse> {
    match preference_service.get(user.id).await {
        Ok(preferences) => Ok(HttpResponse::Ok().json(PreferenceEnvelope {
            message: None,
            preferences,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/customization-preferences",
    tag = "profile",
    request_body = PreferenceRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Preferences saved", body = PreferenceEnvelope),
        (status = 400, description = "Unknown preference value", body = ApiErrorResponse),
        (status = 401, description = "Unauthorized", body = ApiErrorResponse)
    )
)]
pub async fn save_preferences(
    preference_service: web::Data<PreferenceService>,
    CurrentUser(user): CurrentUser,
    request: web::Json<PreferenceRequest>,
) -> Result<HttpResponse> {
    match preference_service.upsert(user.id, request.into_inner()).await {
        Ok(preferences) => Ok(HttpResponse::Ok().json(PreferenceEnvelope {
            message: Some("Preferences updated successfully".to_string()),
            preferences,
        })),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn profile_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/skin-quiz", web::post().to(skin_quiz))
        .service(
            web::resource("/profile")
                .route(web::get().to(get_profile))
                .route(web::put().to(update_profile)),
        )
        .service(
            web::resource("/customization-preferences")
                .route(web::get().to(get_preferences))
                .route(web::post().to(save_preferences)),
        );
}
